//! # Hyperparameter Tuning Shapes
//!
//! Shapes describing the training-job template a tuning job launches:
//! the objective metric, the searchable parameter ranges, and the
//! algorithm/resource configuration each candidate job runs with. The
//! nested channel, output, and resource blocks are shared with plain
//! training jobs.

use std::collections::BTreeMap;

use kiln_core::{wire_enum, Arn, ModelError, ResourceName};
use serde::{Deserialize, Serialize};

use crate::common::VpcConfig;
use crate::required;
use crate::training::{
    Channel, CheckpointConfig, MetricDefinition, OutputDataConfig, ResourceConfig,
    StoppingCondition, TrainingInputMode,
};

wire_enum! {
    /// Whether the tuner maximizes or minimizes the objective metric.
    pub enum TuningObjectiveType {
        Maximize => "Maximize",
        Minimize => "Minimize",
    }
}

wire_enum! {
    /// How a numeric parameter range is traversed during search.
    pub enum ScalingType {
        Auto => "Auto",
        Linear => "Linear",
        Logarithmic => "Logarithmic",
        ReverseLogarithmic => "ReverseLogarithmic",
    }
}

/// The metric a tuning job optimizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TuningJobObjective {
    #[serde(rename = "Type")]
    pub objective_type: TuningObjectiveType,
    /// Must match a metric emitted by the algorithm.
    pub metric_name: String,
}

/// Searchable hyperparameter ranges. Up to 20 parameters total across
/// the three kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterRanges {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub integer_parameter_ranges: Vec<IntegerParameterRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub continuous_parameter_ranges: Vec<ContinuousParameterRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categorical_parameter_ranges: Vec<CategoricalParameterRange>,
}

/// An integer hyperparameter searched between two bounds.
///
/// Bounds travel as strings on the wire, matching the service schema —
/// hyperparameters reach the algorithm container as strings either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntegerParameterRange {
    pub name: String,
    pub min_value: String,
    pub max_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_type: Option<ScalingType>,
}

/// A continuous hyperparameter searched between two bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContinuousParameterRange {
    pub name: String,
    pub min_value: String,
    pub max_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_type: Option<ScalingType>,
}

/// A categorical hyperparameter searched over an explicit value list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoricalParameterRange {
    pub name: String,
    pub values: Vec<String>,
}

/// Algorithm selection for tuning-launched training jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TuningAlgorithmSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_image: Option<String>,
    pub training_input_mode: TrainingInputMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<ResourceName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metric_definitions: Vec<MetricDefinition>,
}

/// The training-job template a tuning job instantiates for each
/// candidate hyperparameter assignment.
///
/// Construct via [`TrainingJobDefinition::builder`]. The algorithm
/// specification, role, output config, resource config, and stopping
/// condition are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingJobDefinition {
    /// Distinguishes definitions when a tuning job carries several.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_name: Option<ResourceName>,
    /// Overrides the tuning job's objective for this definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning_objective: Option<TuningJobObjective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_ranges: Option<ParameterRanges>,
    /// Hyperparameters held fixed across all candidate jobs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub static_hyper_parameters: BTreeMap<String, String>,
    pub algorithm_specification: TuningAlgorithmSpecification,
    pub role_arn: Arn,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_data_config: Vec<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    pub output_data_config: OutputDataConfig,
    pub resource_config: ResourceConfig,
    pub stopping_condition: StoppingCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
}

impl TrainingJobDefinition {
    /// Start building a definition.
    pub fn builder() -> TrainingJobDefinitionBuilder {
        TrainingJobDefinitionBuilder::default()
    }
}

/// Builder for [`TrainingJobDefinition`].
#[derive(Debug, Default)]
pub struct TrainingJobDefinitionBuilder {
    definition_name: Option<ResourceName>,
    tuning_objective: Option<TuningJobObjective>,
    hyper_parameter_ranges: Option<ParameterRanges>,
    static_hyper_parameters: BTreeMap<String, String>,
    algorithm_specification: Option<TuningAlgorithmSpecification>,
    role_arn: Option<Arn>,
    input_data_config: Vec<Channel>,
    vpc_config: Option<VpcConfig>,
    output_data_config: Option<OutputDataConfig>,
    resource_config: Option<ResourceConfig>,
    stopping_condition: Option<StoppingCondition>,
    enable_network_isolation: Option<bool>,
    enable_inter_container_traffic_encryption: Option<bool>,
    enable_managed_spot_training: Option<bool>,
    checkpoint_config: Option<CheckpointConfig>,
}

impl TrainingJobDefinitionBuilder {
    /// Name this definition.
    pub fn definition_name(mut self, name: ResourceName) -> Self {
        self.definition_name = Some(name);
        self
    }

    /// Set a definition-level objective.
    pub fn tuning_objective(mut self, objective: TuningJobObjective) -> Self {
        self.tuning_objective = Some(objective);
        self
    }

    /// Set the searchable ranges.
    pub fn hyper_parameter_ranges(mut self, ranges: ParameterRanges) -> Self {
        self.hyper_parameter_ranges = Some(ranges);
        self
    }

    /// Hold one hyperparameter fixed across candidates.
    pub fn static_hyper_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.static_hyper_parameters.insert(key.into(), value.into());
        self
    }

    /// Set the algorithm specification. Required.
    pub fn algorithm_specification(mut self, spec: TuningAlgorithmSpecification) -> Self {
        self.algorithm_specification = Some(spec);
        self
    }

    /// Set the execution role. Required.
    pub fn role_arn(mut self, role_arn: Arn) -> Self {
        self.role_arn = Some(role_arn);
        self
    }

    /// Add an input channel.
    pub fn input_channel(mut self, channel: Channel) -> Self {
        self.input_data_config.push(channel);
        self
    }

    /// Place candidate jobs in a VPC.
    pub fn vpc_config(mut self, config: VpcConfig) -> Self {
        self.vpc_config = Some(config);
        self
    }

    /// Set the output location. Required.
    pub fn output_data_config(mut self, config: OutputDataConfig) -> Self {
        self.output_data_config = Some(config);
        self
    }

    /// Set the compute resources. Required.
    pub fn resource_config(mut self, config: ResourceConfig) -> Self {
        self.resource_config = Some(config);
        self
    }

    /// Set the stopping condition. Required.
    pub fn stopping_condition(mut self, condition: StoppingCondition) -> Self {
        self.stopping_condition = Some(condition);
        self
    }

    /// Enable network isolation.
    pub fn enable_network_isolation(mut self, enable: bool) -> Self {
        self.enable_network_isolation = Some(enable);
        self
    }

    /// Enable inter-container traffic encryption.
    pub fn enable_inter_container_traffic_encryption(mut self, enable: bool) -> Self {
        self.enable_inter_container_traffic_encryption = Some(enable);
        self
    }

    /// Enable managed spot training for candidate jobs.
    pub fn enable_managed_spot_training(mut self, enable: bool) -> Self {
        self.enable_managed_spot_training = Some(enable);
        self
    }

    /// Set the checkpoint configuration.
    pub fn checkpoint_config(mut self, config: CheckpointConfig) -> Self {
        self.checkpoint_config = Some(config);
        self
    }

    /// Finalize the definition.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingField`] naming the first absent required
    /// field.
    pub fn build(self) -> Result<TrainingJobDefinition, ModelError> {
        const SHAPE: &str = "TrainingJobDefinition";
        Ok(TrainingJobDefinition {
            definition_name: self.definition_name,
            tuning_objective: self.tuning_objective,
            hyper_parameter_ranges: self.hyper_parameter_ranges,
            static_hyper_parameters: self.static_hyper_parameters,
            algorithm_specification: required(
                self.algorithm_specification,
                SHAPE,
                "AlgorithmSpecification",
            )?,
            role_arn: required(self.role_arn, SHAPE, "RoleArn")?,
            input_data_config: self.input_data_config,
            vpc_config: self.vpc_config,
            output_data_config: required(self.output_data_config, SHAPE, "OutputDataConfig")?,
            resource_config: required(self.resource_config, SHAPE, "ResourceConfig")?,
            stopping_condition: required(self.stopping_condition, SHAPE, "StoppingCondition")?,
            enable_network_isolation: self.enable_network_isolation,
            enable_inter_container_traffic_encryption: self
                .enable_inter_container_traffic_encryption,
            enable_managed_spot_training: self.enable_managed_spot_training,
            checkpoint_config: self.checkpoint_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::TrainingInstanceType;
    use serde_json::json;

    fn role() -> Arn {
        Arn::new("arn:aws:iam::123456789012:role/KilnExecution").unwrap()
    }

    fn minimal_definition() -> TrainingJobDefinition {
        TrainingJobDefinition::builder()
            .algorithm_specification(TuningAlgorithmSpecification {
                training_image: Some(
                    "123456789012.dkr.ecr.us-east-1.amazonaws.com/xgboost:1".into(),
                ),
                training_input_mode: TrainingInputMode::File,
                algorithm_name: None,
                metric_definitions: Vec::new(),
            })
            .role_arn(role())
            .output_data_config(OutputDataConfig {
                kms_key_id: None,
                s3_output_path: "s3://kiln-artifacts/tuning/".into(),
            })
            .resource_config(ResourceConfig {
                instance_type: TrainingInstanceType::MlC5Xlarge,
                instance_count: 1,
                volume_size_in_gb: 30,
                volume_kms_key_id: None,
            })
            .stopping_condition(StoppingCondition {
                max_runtime_in_seconds: Some(3_600),
                max_wait_time_in_seconds: None,
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_objective_type_field_serializes_as_type() {
        let objective = TuningJobObjective {
            objective_type: TuningObjectiveType::Minimize,
            metric_name: "validation:error".into(),
        };
        let value = serde_json::to_value(&objective).unwrap();
        assert_eq!(
            value,
            json!({"Type": "Minimize", "MetricName": "validation:error"})
        );
    }

    #[test]
    fn test_scaling_type_catalog() {
        assert_eq!(ScalingType::values().len(), 4);
        assert_eq!(
            ScalingType::from_wire("ReverseLogarithmic"),
            Ok(ScalingType::ReverseLogarithmic)
        );
        assert!(ScalingType::from_wire("Exponential").is_err());
    }

    #[test]
    fn test_builder_missing_resource_config() {
        let err = TrainingJobDefinition::builder()
            .algorithm_specification(TuningAlgorithmSpecification {
                training_image: None,
                training_input_mode: TrainingInputMode::Pipe,
                algorithm_name: Some(ResourceName::new("builtin-xgboost").unwrap()),
                metric_definitions: Vec::new(),
            })
            .role_arn(role())
            .output_data_config(OutputDataConfig {
                kms_key_id: None,
                s3_output_path: "s3://kiln-artifacts/tuning/".into(),
            })
            .stopping_condition(StoppingCondition::default())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingField {
                shape: "TrainingJobDefinition",
                field: "ResourceConfig",
            }
        ));
    }

    #[test]
    fn test_definition_with_ranges_round_trips() {
        let mut definition = minimal_definition();
        definition.hyper_parameter_ranges = Some(ParameterRanges {
            integer_parameter_ranges: vec![IntegerParameterRange {
                name: "max_depth".into(),
                min_value: "2".into(),
                max_value: "10".into(),
                scaling_type: Some(ScalingType::Linear),
            }],
            continuous_parameter_ranges: vec![ContinuousParameterRange {
                name: "eta".into(),
                min_value: "0.01".into(),
                max_value: "0.5".into(),
                scaling_type: Some(ScalingType::Logarithmic),
            }],
            categorical_parameter_ranges: vec![CategoricalParameterRange {
                name: "booster".into(),
                values: vec!["gbtree".into(), "dart".into()],
            }],
        });
        let json = serde_json::to_string(&definition).unwrap();
        let back: TrainingJobDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, definition);
    }
}
