/// Look up `name` through `vars`, failing when it is unset.
pub fn required_var(vars: impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<String> {
    vars(name).ok_or_else(|| anyhow::anyhow!("Environment variable {name} not found"))
}
