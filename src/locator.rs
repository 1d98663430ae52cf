use crate::aws::ResourceTagging;
use crate::error::{Error, Result};
use crate::types::{TagFilters, is_network_load_balancer};
use tracing::debug;

/// Find the ARNs of the network load balancers tagged for `service` in
/// `cluster`. Zero or several matches are returned as-is.
pub async fn find_load_balancer_arns<T>(
    tagging: &T,
    cluster: &str,
    service: &str,
) -> Result<Vec<String>>
where
    T: ResourceTagging + ?Sized,
{
    let filters = TagFilters::for_load_balancer(cluster, service);
    debug!("Searching tagged resources with filters {:?}", filters);

    let arns = tagging
        .tagged_resource_arns(&filters)
        .await
        .map_err(|e| Error::lookup("unable to get resources", e))?;

    Ok(network_load_balancer_arns(arns))
}

/// Keep only NLB ARNs; classic and application load balancers are dropped.
pub fn network_load_balancer_arns(arns: Vec<String>) -> Vec<String> {
    arns.into_iter()
        .filter(|arn| {
            let keep = is_network_load_balancer(arn);
            if !keep {
                debug!("Ignoring non-NLB resource {}", arn);
            }
            keep
        })
        .collect()
}
