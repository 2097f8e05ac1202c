use std::borrow::Cow;
use validator::ValidationError;

/// Rejects text that is empty once trimmed. `length` counts spaces, so a
/// required name of `"   "` would otherwise pass and be stored as `""`.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    Ok(())
}
