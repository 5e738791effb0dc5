//! Tests for FriendError type

use super::*;

#[test]
fn test_store_not_loaded_error_display() {
    let error = FriendError::StoreNotLoaded;
    let msg = error.to_string();
    assert!(msg.contains("not been loaded"));
}

#[test]
fn test_invalid_mode_error_display() {
    let error = FriendError::InvalidMode("grumpy".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Unknown mode 'grumpy'"));
    assert!(msg.contains("smalltalk"));
}

#[test]
fn test_template_load_error_display() {
    let error = FriendError::TemplateLoad {
        file: "warm_replies.json".to_string(),
        reason: "missing field `responses`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("warm_replies.json"));
    assert!(msg.contains("missing field `responses`"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = FriendError::from(io_err);
    assert!(matches!(err, FriendError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_equality() {
    let err1 = FriendError::Io("test".to_string());
    let err2 = FriendError::Io("test".to_string());
    let err3 = FriendError::Io("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}

#[test]
fn test_all_error_variants_are_cloneable() {
    let errors: Vec<FriendError> = vec![
        FriendError::StoreNotLoaded,
        FriendError::InvalidMode("x".to_string()),
        FriendError::TemplateLoad {
            file: "f".to_string(),
            reason: "r".to_string(),
        },
        FriendError::Config("bad".to_string()),
        FriendError::Io("test".to_string()),
    ];

    for error in errors {
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
