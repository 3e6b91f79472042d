/// Settings shared by every device poll in a discovery pass.
pub struct Config {
    /// Login used for both SSH and the Telnet fallback.
    pub username: String,
    pub password: String,
    /// Prefix for snapshot filenames; the UTC timestamp and `.json`
    /// extension are appended on write.
    pub output_prefix: String,
}
