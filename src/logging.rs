use env_logger::{Builder, Env, Target};

/// Initializes the global logger.
///
/// The screen belongs to the aquarium, so nothing is logged unless `RUST_LOG`
/// asks for it; redirect stderr to a file when you do.
pub fn init() {
    let env = Env::default().default_filter_or("off");
    let mut builder = Builder::from_env(env);
    builder.target(Target::Stderr);

    // Only fails when a logger is already set, e.g. across tests.
    let _ = builder.try_init();
}
