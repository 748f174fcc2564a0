//! # Wire-Format Compatibility Tests
//!
//! These tests pin the JSON representation of whole request and response
//! documents against captures of the control-plane protocol. The shape
//! tests in each module check individual fields; the documents here
//! exercise nesting, enum wire strings, epoch-second timestamps, and
//! field omission together, so a serialization regression anywhere in a
//! document fails loudly.
//!
//! Response documents are decoded from literal JSON (the direction the
//! platform controls); request documents are encoded and compared
//! against literal JSON (the direction this crate controls).

use kiln_model::notebook::{DescribeNotebookInstanceResult, NotebookInstanceStatus};
use kiln_model::training::{
    AlgorithmSpecification, Channel, CreateTrainingJobRequest, DataSource, OutputDataConfig,
    ResourceConfig, S3DataSource, S3DataType, SecondaryStatus, StoppingCondition,
    TrainingInputMode, TrainingInstanceType, TrainingJob, TrainingJobStatus,
};
use kiln_model::transform::{
    CreateTransformJobRequest, SplitType, TransformDataSource, TransformInput,
    TransformInstanceType, TransformOutput, TransformResources, TransformS3DataSource,
};
use serde_json::json;

use kiln_core::{Arn, ResourceName};

fn name(s: &str) -> ResourceName {
    ResourceName::new(s).unwrap()
}

fn role() -> Arn {
    Arn::new("arn:aws:iam::123456789012:role/KilnExecution").unwrap()
}

#[test]
fn test_describe_notebook_instance_response_decodes() {
    let body = json!({
        "NotebookInstanceArn":
            "arn:aws:kiln:us-east-1:123456789012:notebook-instance/fraud-eda",
        "NotebookInstanceName": "fraud-eda",
        "NotebookInstanceStatus": "InService",
        "Url": "fraud-eda.notebook.us-east-1.kiln.aws",
        "InstanceType": "ml.t3.xlarge",
        "SubnetId": "subnet-0abc1234",
        "SecurityGroups": ["sg-0def5678"],
        "RoleArn": "arn:aws:iam::123456789012:role/KilnExecution",
        "NetworkInterfaceId": "eni-0123abcd",
        "LastModifiedTime": 1580601600,
        "CreationTime": 1580515200,
        "DirectInternetAccess": "Disabled",
        "VolumeSizeInGB": 100,
        "DefaultCodeRepository": "https://github.com/example/fraud-notebooks",
        "RootAccess": "Enabled",
    });

    let result: DescribeNotebookInstanceResult = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(
        result.notebook_instance_status,
        Some(NotebookInstanceStatus::InService)
    );
    assert_eq!(result.security_groups, vec!["sg-0def5678".to_string()]);
    assert_eq!(result.creation_time.unwrap().timestamp(), 1_580_515_200);
    assert_eq!(result.volume_size_in_gb, Some(100));

    // Absent fields stay absent on re-encode.
    let reencoded = serde_json::to_value(&result).unwrap();
    assert_eq!(reencoded, body);
}

#[test]
fn test_create_training_job_request_encodes() {
    let request = CreateTrainingJobRequest::builder()
        .training_job_name(name("churn-xgb-2020-02-01"))
        .hyper_parameter("max_depth", "6")
        .hyper_parameter("eta", "0.2")
        .algorithm_specification(AlgorithmSpecification {
            training_image: Some("123456789012.dkr.ecr.us-east-1.amazonaws.com/xgboost:1".into()),
            algorithm_name: None,
            training_input_mode: TrainingInputMode::File,
            metric_definitions: Vec::new(),
        })
        .role_arn(role())
        .input_channel(Channel {
            channel_name: "train".into(),
            data_source: DataSource {
                s3_data_source: Some(S3DataSource {
                    s3_data_type: S3DataType::S3Prefix,
                    s3_uri: "s3://kiln-data/churn/train/".into(),
                    s3_data_distribution_type: None,
                    attribute_names: Vec::new(),
                }),
            },
            content_type: Some("text/csv".into()),
            compression_type: None,
            record_wrapper_type: None,
            input_mode: None,
            shuffle_config: None,
        })
        .output_data_config(OutputDataConfig {
            kms_key_id: None,
            s3_output_path: "s3://kiln-artifacts/churn/".into(),
        })
        .resource_config(ResourceConfig {
            instance_type: TrainingInstanceType::MlM5Xlarge,
            instance_count: 1,
            volume_size_in_gb: 30,
            volume_kms_key_id: None,
        })
        .stopping_condition(StoppingCondition {
            max_runtime_in_seconds: Some(86_400),
            max_wait_time_in_seconds: None,
        })
        .build()
        .unwrap();

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "TrainingJobName": "churn-xgb-2020-02-01",
            "HyperParameters": {"eta": "0.2", "max_depth": "6"},
            "AlgorithmSpecification": {
                "TrainingImage":
                    "123456789012.dkr.ecr.us-east-1.amazonaws.com/xgboost:1",
                "TrainingInputMode": "File",
            },
            "RoleArn": "arn:aws:iam::123456789012:role/KilnExecution",
            "InputDataConfig": [{
                "ChannelName": "train",
                "DataSource": {
                    "S3DataSource": {
                        "S3DataType": "S3Prefix",
                        "S3Uri": "s3://kiln-data/churn/train/",
                    },
                },
                "ContentType": "text/csv",
            }],
            "OutputDataConfig": {
                "S3OutputPath": "s3://kiln-artifacts/churn/",
            },
            "ResourceConfig": {
                "InstanceType": "ml.m5.xlarge",
                "InstanceCount": 1,
                "VolumeSizeInGB": 30,
            },
            "StoppingCondition": {
                "MaxRuntimeInSeconds": 86400,
            },
        })
    );
}

#[test]
fn test_describe_training_job_response_decodes_status_history() {
    let body = json!({
        "TrainingJobName": "churn-xgb-2020-02-01",
        "TrainingJobArn":
            "arn:aws:kiln:us-east-1:123456789012:training-job/churn-xgb-2020-02-01",
        "TrainingJobStatus": "Completed",
        "SecondaryStatus": "Completed",
        "ModelArtifacts": {
            "S3ModelArtifacts":
                "s3://kiln-artifacts/churn/churn-xgb-2020-02-01/output/model.tar.gz",
        },
        "CreationTime": 1580515200,
        "TrainingStartTime": 1580515500,
        "TrainingEndTime": 1580519100,
        "SecondaryStatusTransitions": [
            {
                "Status": "Starting",
                "StartTime": 1580515200,
                "EndTime": 1580515500,
                "StatusMessage": "Launching requested ML instances",
            },
            {
                "Status": "Training",
                "StartTime": 1580515500,
                "EndTime": 1580519000,
            },
            {
                "Status": "Completed",
                "StartTime": 1580519000,
            },
        ],
        "FinalMetricDataList": [
            {"MetricName": "validation:error", "Value": 0.042, "Timestamp": 1580519000},
        ],
        "BillableTimeInSeconds": 3600,
    });

    let job: TrainingJob = serde_json::from_value(body).unwrap();
    assert_eq!(job.training_job_status, Some(TrainingJobStatus::Completed));
    assert_eq!(job.secondary_status_transitions.len(), 3);
    assert_eq!(
        job.secondary_status_transitions[1].status,
        SecondaryStatus::Training
    );
    assert!(job.secondary_status_transitions[2].end_time.is_none());
    assert_eq!(
        job.final_metric_data_list[0].value,
        Some(0.042)
    );
}

#[test]
fn test_unknown_enum_value_fails_whole_document() {
    // A bad enum string anywhere in the document is a decode error, not a
    // silently dropped field.
    let body = json!({
        "TrainingJobName": "churn-xgb-2020-02-01",
        "SecondaryStatus": "Defragmenting",
    });
    let err = serde_json::from_value::<TrainingJob>(body).unwrap_err();
    assert!(err.to_string().contains("Defragmenting"));
}

#[test]
fn test_create_transform_job_request_encodes() {
    let request = CreateTransformJobRequest::builder()
        .transform_job_name(name("churn-scoring-2020-02-02"))
        .model_name(name("churn-xgb-model"))
        .max_payload_in_mb(6)
        .transform_input(TransformInput {
            data_source: TransformDataSource {
                s3_data_source: TransformS3DataSource {
                    s3_data_type: S3DataType::S3Prefix,
                    s3_uri: "s3://kiln-data/churn/score/".into(),
                },
            },
            content_type: Some("text/csv".into()),
            compression_type: None,
            split_type: Some(SplitType::Line),
        })
        .transform_output(TransformOutput {
            s3_output_path: "s3://kiln-output/churn/scores/".into(),
            accept: None,
            assemble_with: None,
            kms_key_id: None,
        })
        .transform_resources(TransformResources {
            instance_type: TransformInstanceType::MlC5Xlarge,
            instance_count: 2,
            volume_kms_key_id: None,
        })
        .build()
        .unwrap();

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "TransformJobName": "churn-scoring-2020-02-02",
            "ModelName": "churn-xgb-model",
            "MaxPayloadInMB": 6,
            "TransformInput": {
                "DataSource": {
                    "S3DataSource": {
                        "S3DataType": "S3Prefix",
                        "S3Uri": "s3://kiln-data/churn/score/",
                    },
                },
                "ContentType": "text/csv",
                "SplitType": "Line",
            },
            "TransformOutput": {
                "S3OutputPath": "s3://kiln-output/churn/scores/",
            },
            "TransformResources": {
                "InstanceType": "ml.c5.xlarge",
                "InstanceCount": 2,
            },
        })
    );
}
