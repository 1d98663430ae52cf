use crate::error::BoxError;
use crate::types::TagFilters;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ec2::types::Filter;
use aws_sdk_resourcegroupstagging::types::TagFilter;
use tracing::debug;

/// Tag-based resource search.
#[async_trait]
pub trait ResourceTagging: Send + Sync {
    /// ARNs of every resource matching all of `filters`.
    async fn tagged_resource_arns(&self, filters: &TagFilters) -> Result<Vec<String>, BoxError>;
}

/// Load balancer and target group describes.
#[async_trait]
pub trait LoadBalancing: Send + Sync {
    /// ARNs of the load balancers returned when describing `arn`.
    async fn describe_load_balancers(&self, arn: &str) -> Result<Vec<String>, BoxError>;

    /// ARNs of the target groups bound to the load balancer `arn`.
    async fn describe_target_groups(&self, arn: &str) -> Result<Vec<String>, BoxError>;
}

/// Instance search by tag.
#[async_trait]
pub trait InstanceInventory: Send + Sync {
    async fn tagged_instance_ids(&self, filters: &TagFilters) -> Result<Vec<String>, BoxError>;
}

/// SDK clients built once from the shared config.
#[derive(Clone, Debug)]
pub struct AwsClients {
    elb: aws_sdk_elasticloadbalancingv2::Client,
    ec2: aws_sdk_ec2::Client,
    tagging: aws_sdk_resourcegroupstagging::Client,
}

impl AwsClients {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            elb: aws_sdk_elasticloadbalancingv2::Client::new(config),
            ec2: aws_sdk_ec2::Client::new(config),
            tagging: aws_sdk_resourcegroupstagging::Client::new(config),
        }
    }
}

fn to_tag_filters(filters: &TagFilters) -> Vec<TagFilter> {
    filters
        .iter()
        .map(|(key, values)| {
            TagFilter::builder()
                .key(key)
                .set_values(Some(values.clone()))
                .build()
        })
        .collect()
}

/// EC2 filters address tags as `tag:<key>`.
pub fn to_ec2_filters(filters: &TagFilters) -> Vec<Filter> {
    filters
        .iter()
        .map(|(key, values)| {
            Filter::builder()
                .name(format!("tag:{}", key))
                .set_values(Some(values.clone()))
                .build()
        })
        .collect()
}

#[async_trait]
impl ResourceTagging for AwsClients {
    async fn tagged_resource_arns(&self, filters: &TagFilters) -> Result<Vec<String>, BoxError> {
        let mut pages = self
            .tagging
            .get_resources()
            .set_tag_filters(Some(to_tag_filters(filters)))
            .into_paginator()
            .send();

        let mut arns = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(aws_sdk_resourcegroupstagging::Error::from)?;
            arns.extend(
                page.resource_tag_mapping_list()
                    .iter()
                    .filter_map(|m| m.resource_arn())
                    .map(str::to_string),
            );
        }
        debug!("Tag search returned {} resources", arns.len());
        Ok(arns)
    }
}

#[async_trait]
impl LoadBalancing for AwsClients {
    async fn describe_load_balancers(&self, arn: &str) -> Result<Vec<String>, BoxError> {
        let resp = self
            .elb
            .describe_load_balancers()
            .load_balancer_arns(arn)
            .send()
            .await
            .map_err(aws_sdk_elasticloadbalancingv2::Error::from)?;

        Ok(resp
            .load_balancers()
            .iter()
            .map(|lb| lb.load_balancer_arn().unwrap_or(arn).to_string())
            .collect())
    }

    async fn describe_target_groups(&self, arn: &str) -> Result<Vec<String>, BoxError> {
        let resp = self
            .elb
            .describe_target_groups()
            .load_balancer_arn(arn)
            .send()
            .await
            .map_err(aws_sdk_elasticloadbalancingv2::Error::from)?;

        Ok(resp
            .target_groups()
            .iter()
            .filter_map(|tg| tg.target_group_arn())
            .map(str::to_string)
            .collect())
    }
}

#[async_trait]
impl InstanceInventory for AwsClients {
    async fn tagged_instance_ids(&self, filters: &TagFilters) -> Result<Vec<String>, BoxError> {
        let resp = self
            .ec2
            .describe_instances()
            .set_filters(Some(to_ec2_filters(filters)))
            .send()
            .await
            .map_err(aws_sdk_ec2::Error::from)?;

        Ok(resp
            .reservations()
            .iter()
            .flat_map(|r| r.instances())
            .filter_map(|i| i.instance_id())
            .map(str::to_string)
            .collect())
    }
}
