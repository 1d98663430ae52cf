use serde::Serialize;
use std::collections::BTreeMap;

pub const SERVICE_NAME_TAG: &str = "kubernetes.io/service-name";
pub const NODE_ROLE_TAG: &str = "sigs.k8s.io/cluster-api-provider-aws/role";
pub const OWNED: &str = "owned";

/// Substring that marks an elasticloadbalancing ARN as a network load balancer.
pub const NLB_ARN_MARKER: &str = "loadbalancer/net";

/// Tag key -> accepted values. Keys are AND'd, each key's values are OR'd.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilters(BTreeMap<String, Vec<String>>);

impl TagFilters {
    /// Tags the cloud controller puts on the load balancer of a Service.
    pub fn for_load_balancer(cluster: &str, service: &str) -> Self {
        let mut filters = Self::owned_by(cluster);
        filters.insert(SERVICE_NAME_TAG, service);
        filters
    }

    /// Tags CAPA puts on worker node instances.
    pub fn for_nodes(cluster: &str) -> Self {
        let mut filters = Self::owned_by(cluster);
        filters.insert(NODE_ROLE_TAG, "node");
        filters
    }

    fn owned_by(cluster: &str) -> Self {
        let mut filters = Self::default();
        filters.insert(&cluster_tag_key(cluster), OWNED);
        filters
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Vec<String>> {
        self.0.get(key)
    }
}

pub fn cluster_tag_key(cluster: &str) -> String {
    format!("kubernetes.io/cluster/{}", cluster)
}

pub fn is_network_load_balancer(arn: &str) -> bool {
    arn.contains(NLB_ARN_MARKER)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileReport {
    pub cluster: String,
    pub service: String,
    pub load_balancer_arn: String,
    pub target_group_arn: String,
}
