use crate::aws::{LoadBalancing, ResourceTagging};
use crate::error::{Error, Result};
use crate::locator::find_load_balancer_arns;
use crate::resolver::resolve_target_group_arn;
use crate::types::ReconcileReport;
use tracing::info;

/// Locate the service's NLB and resolve its target group.
///
/// Exactly one NLB must be tagged for the service: none is `NotFound`,
/// several is `Ambiguous` and nothing further is looked up.
pub async fn reconcile<T>(clients: &T, cluster: &str, service: &str) -> Result<ReconcileReport>
where
    T: ResourceTagging + LoadBalancing + ?Sized,
{
    let nlb_arns = find_load_balancer_arns(clients, cluster, service)
        .await
        .map_err(|e| e.context("unable to get NLB ARNs"))?;

    let load_balancer_arn = match nlb_arns.as_slice() {
        [] => {
            // TODO: create the NLB once the owner decides missing NLBs are provisioned here
            return Err(Error::not_found("unable to find NLB ARN"));
        }
        [arn] => arn.clone(),
        _ => {
            return Err(Error::ambiguous(format!(
                "found more than one NLB ARN: {}",
                nlb_arns.join(", ")
            )));
        }
    };
    info!("[{}] NLB for {}: {}", cluster, service, load_balancer_arn);

    let target_group_arn = resolve_target_group_arn(clients, &load_balancer_arn)
        .await
        .map_err(|e| e.context("unable to get target group ARN"))?;
    info!("[{}] Target group: {}", cluster, target_group_arn);

    Ok(ReconcileReport {
        cluster: cluster.to_string(),
        service: service.to_string(),
        load_balancer_arn,
        target_group_arn,
    })
}
