
/// Unique, not-yet-created directory under the system temp dir.
pub fn scratch_dir(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "voice-recorder-app-{}-{}-{:?}",
        label,
        std::process::id(),
        std::thread::current().id()
    ))
}
