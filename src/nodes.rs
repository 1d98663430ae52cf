use crate::aws::InstanceInventory;
use crate::error::{Error, Result};
use crate::types::TagFilters;
use tracing::debug;

/// Instance IDs of the worker nodes CAPA tagged as owned by `cluster`.
pub async fn tagged_node_instance_ids<T>(ec2: &T, cluster: &str) -> Result<Vec<String>>
where
    T: InstanceInventory + ?Sized,
{
    let filters = TagFilters::for_nodes(cluster);
    debug!("Describing instances with filters {:?}", filters);

    ec2.tagged_instance_ids(&filters)
        .await
        .map_err(|e| Error::lookup("unable to get instances", e))
}
