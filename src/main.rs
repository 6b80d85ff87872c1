mod config;
mod linux;
mod process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match config::Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            log::debug!("{}", err);
            println!("{}", config::USAGE);
            std::process::exit(2)
        }
    };

    if cfg!(target_os = "linux") {
        linux::run(&config);
    } else {
        eprintln!("Unsupported operating system");
        std::process::exit(1);
    }
}
