//! # Batch Transform Shapes
//!
//! Request/response shapes for batch transform jobs: offline inference
//! over a dataset using a previously created model.

use std::collections::BTreeMap;

use kiln_core::{wire_enum, Arn, ModelError, ResourceName};
use serde::{Deserialize, Serialize};

use crate::common::{CompressionType, Tag};
use crate::required;
use crate::training::{ExperimentConfig, S3DataType};

wire_enum! {
    /// How many records are packed into each inference request.
    pub enum BatchStrategy {
        MultiRecord => "MultiRecord",
        SingleRecord => "SingleRecord",
    }
}

wire_enum! {
    /// How input objects are split into records.
    pub enum SplitType {
        None => "None",
        Line => "Line",
        RecordIo => "RecordIO",
        TfRecord => "TFRecord",
    }
}

wire_enum! {
    /// How per-record inference results are assembled into output
    /// objects.
    pub enum AssemblyType {
        None => "None",
        Line => "Line",
    }
}

wire_enum! {
    /// Which source is joined onto the inference output.
    pub enum JoinSource {
        Input => "Input",
        None => "None",
    }
}

wire_enum! {
    /// Compute instance sizes available for transform jobs.
    pub enum TransformInstanceType {
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
    }
}

/// Dataset consumed by a transform job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformInput {
    pub data_source: TransformDataSource,
    /// MIME type of the input data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<CompressionType>,
    /// Defaults to `None`: each input object is one request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_type: Option<SplitType>,
}

/// Location of the transform job's input data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformDataSource {
    pub s3_data_source: TransformS3DataSource,
}

/// An S3-backed transform input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformS3DataSource {
    pub s3_data_type: S3DataType,
    pub s3_uri: String,
}

/// Where and how transform results are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformOutput {
    pub s3_output_path: String,
    /// MIME type attached to output objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assemble_with: Option<AssemblyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

/// Compute resources allocated to a transform job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformResources {
    pub instance_type: TransformInstanceType,
    pub instance_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

/// JSONPath filters relating input records to inference results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataProcessing {
    /// Portion of the input passed to the model. Defaults to `$`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_filter: Option<String>,
    /// Portion of the joined result written to output. Defaults to `$`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_source: Option<JoinSource>,
}

/// Request shape for the CreateTransformJob operation.
///
/// Construct via [`CreateTransformJobRequest::builder`]. The job name,
/// model name, input, output, and resources are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTransformJobRequest {
    pub transform_job_name: ResourceName,
    /// Name of the model to run inference with.
    pub model_name: ResourceName,
    /// Parallelism per instance; 0 lets the platform choose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_transforms: Option<i32>,
    /// Upper bound on request payload size, in MB.
    #[serde(
        rename = "MaxPayloadInMB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_payload_in_mb: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_strategy: Option<BatchStrategy>,
    /// Environment variables set in the inference container.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    pub transform_input: TransformInput,
    pub transform_output: TransformOutput,
    pub transform_resources: TransformResources,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_processing: Option<DataProcessing>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
}

impl CreateTransformJobRequest {
    /// Start building a create request.
    pub fn builder() -> CreateTransformJobRequestBuilder {
        CreateTransformJobRequestBuilder::default()
    }
}

/// Builder for [`CreateTransformJobRequest`].
#[derive(Debug, Default)]
pub struct CreateTransformJobRequestBuilder {
    transform_job_name: Option<ResourceName>,
    model_name: Option<ResourceName>,
    max_concurrent_transforms: Option<i32>,
    max_payload_in_mb: Option<i32>,
    batch_strategy: Option<BatchStrategy>,
    environment: BTreeMap<String, String>,
    transform_input: Option<TransformInput>,
    transform_output: Option<TransformOutput>,
    transform_resources: Option<TransformResources>,
    data_processing: Option<DataProcessing>,
    tags: Vec<Tag>,
    experiment_config: Option<ExperimentConfig>,
}

impl CreateTransformJobRequestBuilder {
    /// Set the transform job name. Required.
    pub fn transform_job_name(mut self, name: ResourceName) -> Self {
        self.transform_job_name = Some(name);
        self
    }

    /// Set the model to run. Required.
    pub fn model_name(mut self, name: ResourceName) -> Self {
        self.model_name = Some(name);
        self
    }

    /// Set per-instance request parallelism.
    pub fn max_concurrent_transforms(mut self, max: i32) -> Self {
        self.max_concurrent_transforms = Some(max);
        self
    }

    /// Set the payload size bound in MB.
    pub fn max_payload_in_mb(mut self, max: i32) -> Self {
        self.max_payload_in_mb = Some(max);
        self
    }

    /// Set the batch strategy.
    pub fn batch_strategy(mut self, strategy: BatchStrategy) -> Self {
        self.batch_strategy = Some(strategy);
        self
    }

    /// Set one container environment variable.
    pub fn environment_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    /// Set the input dataset. Required.
    pub fn transform_input(mut self, input: TransformInput) -> Self {
        self.transform_input = Some(input);
        self
    }

    /// Set the output location. Required.
    pub fn transform_output(mut self, output: TransformOutput) -> Self {
        self.transform_output = Some(output);
        self
    }

    /// Set the compute resources. Required.
    pub fn transform_resources(mut self, resources: TransformResources) -> Self {
        self.transform_resources = Some(resources);
        self
    }

    /// Set input/output record filters.
    pub fn data_processing(mut self, processing: DataProcessing) -> Self {
        self.data_processing = Some(processing);
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
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
    pub fn build(self) -> Result<CreateTransformJobRequest, ModelError> {
        const SHAPE: &str = "CreateTransformJobRequest";
        Ok(CreateTransformJobRequest {
            transform_job_name: required(self.transform_job_name, SHAPE, "TransformJobName")?,
            model_name: required(self.model_name, SHAPE, "ModelName")?,
            max_concurrent_transforms: self.max_concurrent_transforms,
            max_payload_in_mb: self.max_payload_in_mb,
            batch_strategy: self.batch_strategy,
            environment: self.environment,
            transform_input: required(self.transform_input, SHAPE, "TransformInput")?,
            transform_output: required(self.transform_output, SHAPE, "TransformOutput")?,
            transform_resources: required(self.transform_resources, SHAPE, "TransformResources")?,
            data_processing: self.data_processing,
            tags: self.tags,
            experiment_config: self.experiment_config,
        })
    }
}

/// Response shape for CreateTransformJob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTransformJobResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_job_arn: Option<Arn>,
}
