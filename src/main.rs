use azure_nic_inventory::config::Args;
use azure_nic_inventory::{
    output, print_database_servers, print_nic_inventory, print_resources_by_type, AzCli, Session,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    if let Err(e) = log4rs::init_file(&args.log_config, Default::default()) {
        eprintln!(
            "WARN logging disabled, cannot load {}: {e}",
            args.log_config.display()
        );
    }
    log::info!("#Start main()");

    let subscription_id = match args.subscription_id() {
        Ok(id) => id,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let session = match Session::establish(subscription_id, Box::new(AzCli)) {
        Ok(session) => session,
        Err(e) => {
            log::error!("cannot obtain the session -- {e}");
            eprintln!("cannot obtain the session -- {e}");
            return ExitCode::FAILURE;
        }
    };

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    println!("{}", output::banner(&session, &generated_at));

    let summary = print_nic_inventory(&session);
    if !args.skip_databases {
        print_database_servers(&session);
    }
    if !args.resource_types.is_empty() {
        print_resources_by_type(&session, &args.resource_types);
    }

    log::info!("#End main() {summary:?}");
    ExitCode::SUCCESS
}
