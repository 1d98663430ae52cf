use crate::aws::LoadBalancing;
use crate::error::{Error, Result};
use tracing::debug;

/// Resolve the single target group attached to the load balancer `arn`.
pub async fn resolve_target_group_arn<T>(elb: &T, arn: &str) -> Result<String>
where
    T: LoadBalancing + ?Sized,
{
    let load_balancers = elb
        .describe_load_balancers(arn)
        .await
        .map_err(|e| Error::lookup("unable to describe load balancer", e))?;

    let [load_balancer] = load_balancers.as_slice() else {
        debug!(
            "Describe of {} returned {} load balancers",
            arn,
            load_balancers.len()
        );
        return Err(Error::not_found("unable to find NLB"));
    };

    let target_groups = elb
        .describe_target_groups(load_balancer)
        .await
        .map_err(|e| Error::lookup("unable to describe target groups", e))?;

    match target_groups.as_slice() {
        [target_group] => Ok(target_group.clone()),
        _ => {
            debug!(
                "Load balancer {} has {} target groups",
                load_balancer,
                target_groups.len()
            );
            Err(Error::not_found("unable to find target group"))
        }
    }
}
