//! Correlates NICs with their public IPs and VMs.
//!
//! Partial-failure policy:
//! - group listing or NIC listing errors are logged and the affected group is abandoned
//! - resolver errors are logged and the single field falls back to its sentinel
//! - nothing here ends the run

use super::{NicEnumerator, ResourceGroupEnumerator};
use crate::azure::{Projection, ResourceResolver, Session};
use crate::config::{PUBLIC_IP_SENTINEL, VM_SENTINEL};
use crate::models::{EnrichedNic, NicRecord};
use colored::Colorize;

/// Counters for one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub groups: usize,
    pub failed_groups: usize,
    pub records: usize,
    /// Fields that fell back to a sentinel because resolution failed.
    pub degraded_fields: usize,
}

pub struct EnrichmentPipeline<'a> {
    groups: ResourceGroupEnumerator<'a>,
    nics: NicEnumerator<'a>,
    resolver: ResourceResolver<'a>,
}

impl<'a> EnrichmentPipeline<'a> {
    pub fn new(session: &'a Session) -> EnrichmentPipeline<'a> {
        EnrichmentPipeline {
            groups: ResourceGroupEnumerator::new(session),
            nics: NicEnumerator::new(session),
            resolver: ResourceResolver::new(session),
        }
    }

    /// Walk every group and NIC configuration, handing each enriched record to `emit`
    /// before the next one is resolved.
    pub fn run<F: FnMut(&EnrichedNic)>(&self, mut emit: F) -> RunSummary {
        log::info!("#Start EnrichmentPipeline::run()");
        let mut summary = RunSummary::default();

        for group in self.groups.list() {
            let group = match group {
                Ok(group) => group,
                Err(e) => {
                    log::error!("unable to retrieve resource group: {e}");
                    summary.failed_groups += 1;
                    continue;
                }
            };
            summary.groups += 1;
            log::info!("resource group '{}'", group.as_str().on_blue());

            for record in self.nics.list(&group) {
                match record {
                    Ok(record) => {
                        let enriched = self.enrich(record, &mut summary);
                        emit(&enriched);
                        summary.records += 1;
                    }
                    Err(e) => {
                        log::error!("unable to retrieve NIC list of '{group}': {e}");
                        summary.failed_groups += 1;
                    }
                }
            }
        }

        log::info!(
            "Done: groups={} failed={} records={} degraded_fields={}",
            summary.groups,
            summary.failed_groups,
            summary.records,
            summary.degraded_fields
        );
        summary
    }

    /// Resolve both references of `record`. Consumes it, so it is enriched exactly once.
    pub fn enrich(&self, record: NicRecord, summary: &mut RunSummary) -> EnrichedNic {
        let public_ip = self.resolve_or_sentinel(
            record.public_ip_ref.as_deref(),
            Projection::PublicIpAddress,
            PUBLIC_IP_SENTINEL,
            summary,
        );
        let vm = self.resolve_or_sentinel(
            record.vm_ref.as_deref(),
            Projection::DisplayName,
            VM_SENTINEL,
            summary,
        );
        EnrichedNic {
            resource_group: record.resource_group,
            nic_name: record.nic_name,
            ip_config_name: record.ip_config_name,
            private_ip: record.private_ip,
            public_ip,
            vm,
        }
    }

    fn resolve_or_sentinel(
        &self,
        reference: Option<&str>,
        projection: Projection,
        sentinel: &str,
        summary: &mut RunSummary,
    ) -> String {
        let Some(resource_id) = reference else {
            return sentinel.to_string();
        };
        match self.resolver.resolve(resource_id, projection) {
            Ok(value) if !value.is_empty() => value,
            Ok(_) => sentinel.to_string(),
            Err(e) => {
                log::warn!("cannot describe resource - {e}");
                summary.degraded_fields += 1;
                sentinel.to_string()
            }
        }
    }
}
