// crates/shared/src/permissions.rs

/// Precise device location, as reported in `user.permissions` and requested
/// through `actions.intent.PERMISSION`.
pub const DEVICE_PRECISE_LOCATION: &str = "DEVICE_PRECISE_LOCATION";

/// Whether `required` appears in the client-reported permission list,
/// compared case-insensitively.
///
/// This is advisory: the list comes from the client surface and is not
/// verified in any way.
pub fn has_permission<S: AsRef<str>>(permissions: &[S], required: &str) -> bool {
    permissions
        .iter()
        .any(|granted| eq_fold(granted.as_ref(), required))
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
