/// Fallback author name for scaffolded posts: the OS user's real name, or
/// the login name when the real name is not set.
pub fn get_name() -> String {
    let name = whoami::realname();
    if name.is_empty() {
        return whoami::username();
    }
    name
}
