// cargo watch -x 'fmt' -x 'run'  // 'run -- --subscription-id <id>'

pub mod azure;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use azure::{AzCli, CommandRunner, Session};
pub use error::{AzError, Result};
pub use processing::{
    DatabaseServerEnumerator, EnrichmentPipeline, NicEnumerator, ResourceGroupEnumerator,
    ResourceTypeEnumerator, RunSummary,
};

/// Print every NIC IP configuration of the subscription with resolved public IP and VM.
pub fn print_nic_inventory(session: &Session) -> RunSummary {
    println!("{}", output::nic_header());
    EnrichmentPipeline::new(session).run(|nic| println!("{}", output::nic_row(nic)))
}

/// Print the subscription's PostgreSQL servers. Errors are logged, not returned.
pub fn print_database_servers(session: &Session) -> usize {
    println!(" ========== POSTGRES DATA =========== ");
    match DatabaseServerEnumerator::new(session).list() {
        Ok(servers) => {
            println!("{}", output::database_header());
            for server in &servers {
                println!("{}", output::database_row(server));
            }
            servers.len()
        }
        Err(e) => {
            log::error!("unable to retrieve PostgreSQL servers: {e}");
            0
        }
    }
}

/// Print generic resources of each requested type. Errors are logged, not returned.
pub fn print_resources_by_type(session: &Session, resource_types: &[String]) -> usize {
    let enumerator = ResourceTypeEnumerator::new(session);
    let mut printed = 0;
    for resource_type in resource_types {
        println!(" ========== {resource_type} =========== ");
        println!("{}", output::resource_header());
        for resource in enumerator.list(resource_type) {
            match resource {
                Ok(resource) => {
                    println!("{}", output::resource_row(&resource));
                    printed += 1;
                }
                Err(e) => log::error!("unable to list {resource_type}: {e}"),
            }
        }
    }
    printed
}
