//! # Training Job Shapes
//!
//! Request/response shapes for the model-training operations, plus the
//! nested configuration blocks they share with hyperparameter tuning:
//! algorithm selection, input channels, output location, compute
//! resources, and stopping conditions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kiln_core::{wire_enum, Arn, ModelError, ResourceName};
use serde::{Deserialize, Serialize};

use crate::common::{CompressionType, Tag, VpcConfig};
use crate::required;

wire_enum! {
    /// Top-level status of a training job.
    pub enum TrainingJobStatus {
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
}

wire_enum! {
    /// Fine-grained progress of a training job within its top-level
    /// status. Transitions are recorded in
    /// [`SecondaryStatusTransition`] history.
    pub enum SecondaryStatus {
        Starting => "Starting",
        LaunchingMlInstances => "LaunchingMLInstances",
        PreparingTrainingStack => "PreparingTrainingStack",
        Downloading => "Downloading",
        DownloadingTrainingImage => "DownloadingTrainingImage",
        Training => "Training",
        Uploading => "Uploading",
        Stopping => "Stopping",
        Stopped => "Stopped",
        MaxRuntimeExceeded => "MaxRuntimeExceeded",
        Completed => "Completed",
        Failed => "Failed",
        Interrupted => "Interrupted",
        MaxWaitTimeExceeded => "MaxWaitTimeExceeded",
    }
}

wire_enum! {
    /// How training data is made available to the algorithm container.
    ///
    /// `File` downloads the channel to local volume before training
    /// starts; `Pipe` streams it directly.
    pub enum TrainingInputMode {
        Pipe => "Pipe",
        File => "File",
    }
}

wire_enum! {
    /// Compute instance sizes available for training jobs.
    pub enum TrainingInstanceType {
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42Xlarge => "ml.m4.2xlarge",
        MlM44Xlarge => "ml.m4.4xlarge",
        MlM410Xlarge => "ml.m4.10xlarge",
        MlM416Xlarge => "ml.m4.16xlarge",
        MlM5Large => "ml.m5.large",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52Xlarge => "ml.m5.2xlarge",
        MlM54Xlarge => "ml.m5.4xlarge",
        MlM512Xlarge => "ml.m5.12xlarge",
        MlM524Xlarge => "ml.m5.24xlarge",
        MlC4Xlarge => "ml.c4.xlarge",
        MlC42Xlarge => "ml.c4.2xlarge",
        MlC44Xlarge => "ml.c4.4xlarge",
        MlC48Xlarge => "ml.c4.8xlarge",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52Xlarge => "ml.c5.2xlarge",
        MlC54Xlarge => "ml.c5.4xlarge",
        MlC59Xlarge => "ml.c5.9xlarge",
        MlC518Xlarge => "ml.c5.18xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28Xlarge => "ml.p2.8xlarge",
        MlP216Xlarge => "ml.p2.16xlarge",
        MlP32Xlarge => "ml.p3.2xlarge",
        MlP38Xlarge => "ml.p3.8xlarge",
        MlP316Xlarge => "ml.p3.16xlarge",
        MlP3Dn24Xlarge => "ml.p3dn.24xlarge",
        MlG4DnXlarge => "ml.g4dn.xlarge",
        MlG4Dn2Xlarge => "ml.g4dn.2xlarge",
        MlG4Dn4Xlarge => "ml.g4dn.4xlarge",
        MlG4Dn8Xlarge => "ml.g4dn.8xlarge",
        MlG4Dn12Xlarge => "ml.g4dn.12xlarge",
        MlG4Dn16Xlarge => "ml.g4dn.16xlarge",
    }
}

wire_enum! {
    /// Record framing applied to channel data before it reaches the
    /// algorithm.
    pub enum RecordWrapper {
        None => "None",
        RecordIo => "RecordIO",
    }
}

wire_enum! {
    /// How a channel's S3 location is interpreted.
    pub enum S3DataType {
        ManifestFile => "ManifestFile",
        S3Prefix => "S3Prefix",
        AugmentedManifestFile => "AugmentedManifestFile",
    }
}

wire_enum! {
    /// How channel data is distributed across training instances.
    pub enum S3DataDistribution {
        FullyReplicated => "FullyReplicated",
        ShardedByS3Key => "ShardedByS3Key",
    }
}

/// Algorithm selection for a training job: either a registered algorithm
/// by name or a container image, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmSpecification {
    /// Registry path of the training container image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_image: Option<String>,
    /// Name of a registered algorithm resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<ResourceName>,
    pub training_input_mode: TrainingInputMode,
    /// Regexes extracting metrics from the algorithm's log stream.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metric_definitions: Vec<MetricDefinition>,
}

/// A named regex that pulls one metric out of algorithm logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDefinition {
    /// Metric name, e.g. `validation:error`.
    pub name: String,
    /// Regex with one capture group for the metric value.
    pub regex: String,
}

/// One input channel of a training job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Channel {
    /// Channel name the algorithm reads, e.g. `train` or `validation`.
    pub channel_name: String,
    pub data_source: DataSource,
    /// MIME type of the channel data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<CompressionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_wrapper_type: Option<RecordWrapper>,
    /// Overrides the algorithm-level input mode for this channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<TrainingInputMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_config: Option<ShuffleConfig>,
}

/// Location of a channel's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_data_source: Option<S3DataSource>,
}

/// An S3-backed channel data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3DataSource {
    pub s3_data_type: S3DataType,
    /// Prefix or manifest location, depending on the data type.
    pub s3_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_data_distribution_type: Option<S3DataDistribution>,
    /// Attribute names read from an augmented manifest.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_names: Vec<String>,
}

/// Per-epoch shuffle of channel data, keyed by a deterministic seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShuffleConfig {
    pub seed: i64,
}

/// Where the trained model artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDataConfig {
    /// Key used to encrypt artifacts at rest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    pub s3_output_path: String,
}

/// Compute resources allocated to a training job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceConfig {
    pub instance_type: TrainingInstanceType,
    pub instance_count: i32,
    /// Size of the ML storage volume attached to each instance.
    #[serde(rename = "VolumeSizeInGB")]
    pub volume_size_in_gb: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

/// Limits on how long a job may run or wait for spot capacity.
///
/// When the runtime limit is hit the platform delays job termination for
/// 120 seconds so the algorithm can persist a final checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoppingCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_runtime_in_seconds: Option<i32>,
    /// Must be at least the runtime limit; only meaningful for managed
    /// spot training.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_wait_time_in_seconds: Option<i32>,
}

/// Checkpoint synchronization between local storage and S3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckpointConfig {
    pub s3_uri: String,
    /// Defaults to `/opt/ml/checkpoints/` in the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

/// Location of the trained model artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelArtifacts {
    pub s3_model_artifacts: String,
}

/// A final metric value emitted by the training algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

/// One entry in a job's secondary-status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecondaryStatusTransition {
    pub status: SecondaryStatus,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    /// Absent while this is the current status.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

/// Associates a job with an experiment and trial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExperimentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_name: Option<ResourceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_name: Option<ResourceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_component_display_name: Option<ResourceName>,
}

/// Request shape for the CreateTrainingJob operation.
///
/// Construct via [`CreateTrainingJobRequest::builder`]. The name,
/// algorithm specification, role, output config, resource config, and
/// stopping condition are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrainingJobRequest {
    pub training_job_name: ResourceName,
    /// Algorithm hyperparameters, passed through to the container
    /// unmodified. At most 100 entries.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hyper_parameters: BTreeMap<String, String>,
    pub algorithm_specification: AlgorithmSpecification,
    pub role_arn: Arn,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_data_config: Vec<Channel>,
    pub output_data_config: OutputDataConfig,
    pub resource_config: ResourceConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    pub stopping_condition: StoppingCondition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Isolate training containers from the network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    /// Encrypt traffic between instances of a distributed job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    /// Run on spare capacity with checkpoint-based resume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
}

impl CreateTrainingJobRequest {
    /// Start building a create request.
    pub fn builder() -> CreateTrainingJobRequestBuilder {
        CreateTrainingJobRequestBuilder::default()
    }
}

/// Builder for [`CreateTrainingJobRequest`].
#[derive(Debug, Default)]
pub struct CreateTrainingJobRequestBuilder {
    training_job_name: Option<ResourceName>,
    hyper_parameters: BTreeMap<String, String>,
    algorithm_specification: Option<AlgorithmSpecification>,
    role_arn: Option<Arn>,
    input_data_config: Vec<Channel>,
    output_data_config: Option<OutputDataConfig>,
    resource_config: Option<ResourceConfig>,
    vpc_config: Option<VpcConfig>,
    stopping_condition: Option<StoppingCondition>,
    tags: Vec<Tag>,
    enable_network_isolation: Option<bool>,
    enable_inter_container_traffic_encryption: Option<bool>,
    enable_managed_spot_training: Option<bool>,
    checkpoint_config: Option<CheckpointConfig>,
    experiment_config: Option<ExperimentConfig>,
}

impl CreateTrainingJobRequestBuilder {
    /// Set the training job name. Required.
    pub fn training_job_name(mut self, name: ResourceName) -> Self {
        self.training_job_name = Some(name);
        self
    }

    /// Add one hyperparameter.
    pub fn hyper_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.hyper_parameters.insert(key.into(), value.into());
        self
    }

    /// Set the algorithm specification. Required.
    pub fn algorithm_specification(mut self, spec: AlgorithmSpecification) -> Self {
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

    /// Place the job in a VPC.
    pub fn vpc_config(mut self, config: VpcConfig) -> Self {
        self.vpc_config = Some(config);
        self
    }

    /// Set the stopping condition. Required.
    pub fn stopping_condition(mut self, condition: StoppingCondition) -> Self {
        self.stopping_condition = Some(condition);
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
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

    /// Enable managed spot training.
    pub fn enable_managed_spot_training(mut self, enable: bool) -> Self {
        self.enable_managed_spot_training = Some(enable);
        self
    }

    /// Set the checkpoint configuration.
    pub fn checkpoint_config(mut self, config: CheckpointConfig) -> Self {
        self.checkpoint_config = Some(config);
        self
    }

    /// Associate the job with an experiment.
    pub fn experiment_config(mut self, config: ExperimentConfig) -> Self {
        self.experiment_config = Some(config);
        self
    }

    /// Finalize the request.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingField`] naming the first absent required
    /// field.
    pub fn build(self) -> Result<CreateTrainingJobRequest, ModelError> {
        const SHAPE: &str = "CreateTrainingJobRequest";
        Ok(CreateTrainingJobRequest {
            training_job_name: required(self.training_job_name, SHAPE, "TrainingJobName")?,
            hyper_parameters: self.hyper_parameters,
            algorithm_specification: required(
                self.algorithm_specification,
                SHAPE,
                "AlgorithmSpecification",
            )?,
            role_arn: required(self.role_arn, SHAPE, "RoleArn")?,
            input_data_config: self.input_data_config,
            output_data_config: required(self.output_data_config, SHAPE, "OutputDataConfig")?,
            resource_config: required(self.resource_config, SHAPE, "ResourceConfig")?,
            vpc_config: self.vpc_config,
            stopping_condition: required(self.stopping_condition, SHAPE, "StoppingCondition")?,
            tags: self.tags,
            enable_network_isolation: self.enable_network_isolation,
            enable_inter_container_traffic_encryption: self
                .enable_inter_container_traffic_encryption,
            enable_managed_spot_training: self.enable_managed_spot_training,
            checkpoint_config: self.checkpoint_config,
            experiment_config: self.experiment_config,
        })
    }
}

/// Response shape for CreateTrainingJob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrainingJobResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_job_arn: Option<Arn>,
}

/// Request shape for the DescribeTrainingJob operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTrainingJobRequest {
    pub training_job_name: ResourceName,
}

impl DescribeTrainingJobRequest {
    /// Describe the named training job.
    pub fn new(training_job_name: ResourceName) -> Self {
        Self { training_job_name }
    }
}

/// A training job as described by the control plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<ResourceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_job_arn: Option<Arn>,
    /// Present when the job was launched by a tuning job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning_job_arn: Option<Arn>,
    /// Present when the job was launched by a labeling job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labeling_job_arn: Option<Arn>,
    #[serde(
        rename = "AutoMLJobArn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_ml_job_arn: Option<Arn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_artifacts: Option<ModelArtifacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_job_status: Option<TrainingJobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_status: Option<SecondaryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hyper_parameters: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_specification: Option<AlgorithmSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Arn>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_data_config: Vec<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_config: Option<ResourceConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<StoppingCondition>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_end_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_status_transitions: Vec<SecondaryStatusTransition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub final_metric_data_list: Vec<MetricData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
    /// Billable compute time; less than wall-clock time for spot jobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_time_in_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable_time_in_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// The DescribeTrainingJob payload is the job entity itself.
pub type DescribeTrainingJobResult = TrainingJob;
