//! # Notebook Instance Shapes
//!
//! Request/response shapes for the notebook-instance operations: create,
//! update, and describe. A notebook instance is a managed compute instance
//! running the platform's notebook environment, attached to an execution
//! role and optionally placed in a customer subnet.

use chrono::{DateTime, Utc};
use kiln_core::{wire_enum, Arn, ModelError, ResourceName};
use serde::{Deserialize, Serialize};

use crate::common::Tag;
use crate::required;

wire_enum! {
    /// Lifecycle status of a notebook instance.
    pub enum NotebookInstanceStatus {
        Pending => "Pending",
        InService => "InService",
        Stopping => "Stopping",
        Stopped => "Stopped",
        Failed => "Failed",
        Deleting => "Deleting",
        Updating => "Updating",
    }
}

wire_enum! {
    /// Compute instance sizes available for notebook instances.
    pub enum NotebookInstanceType {
        MlT2Medium => "ml.t2.medium",
        MlT2Large => "ml.t2.large",
        MlT2Xlarge => "ml.t2.xlarge",
        MlT22Xlarge => "ml.t2.2xlarge",
        MlT3Medium => "ml.t3.medium",
        MlT3Large => "ml.t3.large",
        MlT3Xlarge => "ml.t3.xlarge",
        MlT32Xlarge => "ml.t3.2xlarge",
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42Xlarge => "ml.m4.2xlarge",
        MlM44Xlarge => "ml.m4.4xlarge",
        MlM410Xlarge => "ml.m4.10xlarge",
        MlM416Xlarge => "ml.m4.16xlarge",
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
        MlC5DXlarge => "ml.c5d.xlarge",
        MlC5D2Xlarge => "ml.c5d.2xlarge",
        MlC5D4Xlarge => "ml.c5d.4xlarge",
        MlC5D9Xlarge => "ml.c5d.9xlarge",
        MlC5D18Xlarge => "ml.c5d.18xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28Xlarge => "ml.p2.8xlarge",
        MlP216Xlarge => "ml.p2.16xlarge",
        MlP32Xlarge => "ml.p3.2xlarge",
        MlP38Xlarge => "ml.p3.8xlarge",
        MlP316Xlarge => "ml.p3.16xlarge",
    }
}

wire_enum! {
    /// Elastic-inference accelerators attachable to a notebook instance.
    pub enum NotebookAcceleratorType {
        MlEia1Medium => "ml.eia1.medium",
        MlEia1Large => "ml.eia1.large",
        MlEia1Xlarge => "ml.eia1.xlarge",
        MlEia2Medium => "ml.eia2.medium",
        MlEia2Large => "ml.eia2.large",
        MlEia2Xlarge => "ml.eia2.xlarge",
    }
}

wire_enum! {
    /// Whether notebook users get root access on the instance.
    pub enum RootAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

wire_enum! {
    /// Whether the notebook instance gets a direct route to the internet.
    ///
    /// When disabled, the instance can only reach the network through a
    /// NAT or interface endpoint in its subnet.
    pub enum DirectInternetAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

/// Request shape for the CreateNotebookInstance operation.
///
/// Construct via [`CreateNotebookInstanceRequest::builder`]; the name,
/// instance type, and execution role are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNotebookInstanceRequest {
    /// Name of the new notebook instance, unique per account and region.
    pub notebook_instance_name: ResourceName,
    /// Compute instance size.
    pub instance_type: NotebookInstanceType,
    /// Subnet to place the instance's network interface in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// Security groups for the subnet's VPC. At most five.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_group_ids: Vec<String>,
    /// Execution role assumed by the notebook instance.
    pub role_arn: Arn,
    /// Key for encrypting the attached storage volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Lifecycle configuration run on create and start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_name: Option<ResourceName>,
    /// Defaults to `Enabled` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_internet_access: Option<DirectInternetAccess>,
    /// Storage volume size, 5–16384 GB. Defaults to 5.
    #[serde(
        rename = "VolumeSizeInGB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_size_in_gb: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accelerator_types: Vec<NotebookAcceleratorType>,
    /// Git repository cloned as the working directory's default repo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    /// Up to three additional Git repositories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_code_repositories: Vec<String>,
    /// Defaults to `Enabled` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_access: Option<RootAccess>,
}

impl CreateNotebookInstanceRequest {
    /// Start building a create request.
    pub fn builder() -> CreateNotebookInstanceRequestBuilder {
        CreateNotebookInstanceRequestBuilder::default()
    }
}

/// Builder for [`CreateNotebookInstanceRequest`].
#[derive(Debug, Default)]
pub struct CreateNotebookInstanceRequestBuilder {
    notebook_instance_name: Option<ResourceName>,
    instance_type: Option<NotebookInstanceType>,
    subnet_id: Option<String>,
    security_group_ids: Vec<String>,
    role_arn: Option<Arn>,
    kms_key_id: Option<String>,
    tags: Vec<Tag>,
    lifecycle_config_name: Option<ResourceName>,
    direct_internet_access: Option<DirectInternetAccess>,
    volume_size_in_gb: Option<i32>,
    accelerator_types: Vec<NotebookAcceleratorType>,
    default_code_repository: Option<String>,
    additional_code_repositories: Vec<String>,
    root_access: Option<RootAccess>,
}

impl CreateNotebookInstanceRequestBuilder {
    /// Set the notebook instance name. Required.
    pub fn notebook_instance_name(mut self, name: ResourceName) -> Self {
        self.notebook_instance_name = Some(name);
        self
    }

    /// Set the instance type. Required.
    pub fn instance_type(mut self, instance_type: NotebookInstanceType) -> Self {
        self.instance_type = Some(instance_type);
        self
    }

    /// Set the subnet.
    pub fn subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.subnet_id = Some(subnet_id.into());
        self
    }

    /// Add a security group.
    pub fn security_group_id(mut self, id: impl Into<String>) -> Self {
        self.security_group_ids.push(id.into());
        self
    }

    /// Set the execution role. Required.
    pub fn role_arn(mut self, role_arn: Arn) -> Self {
        self.role_arn = Some(role_arn);
        self
    }

    /// Set the storage encryption key.
    pub fn kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Set the lifecycle configuration.
    pub fn lifecycle_config_name(mut self, name: ResourceName) -> Self {
        self.lifecycle_config_name = Some(name);
        self
    }

    /// Set direct internet access.
    pub fn direct_internet_access(mut self, access: DirectInternetAccess) -> Self {
        self.direct_internet_access = Some(access);
        self
    }

    /// Set the storage volume size in GB.
    pub fn volume_size_in_gb(mut self, size: i32) -> Self {
        self.volume_size_in_gb = Some(size);
        self
    }

    /// Add an elastic-inference accelerator.
    pub fn accelerator_type(mut self, accelerator: NotebookAcceleratorType) -> Self {
        self.accelerator_types.push(accelerator);
        self
    }

    /// Set the default code repository.
    pub fn default_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.default_code_repository = Some(repository.into());
        self
    }

    /// Add an additional code repository.
    pub fn additional_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.additional_code_repositories.push(repository.into());
        self
    }

    /// Set root access.
    pub fn root_access(mut self, access: RootAccess) -> Self {
        self.root_access = Some(access);
        self
    }

    /// Finalize the request.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingField`] if the name, instance type, or role
    /// is absent.
    pub fn build(self) -> Result<CreateNotebookInstanceRequest, ModelError> {
        const SHAPE: &str = "CreateNotebookInstanceRequest";
        Ok(CreateNotebookInstanceRequest {
            notebook_instance_name: required(
                self.notebook_instance_name,
                SHAPE,
                "NotebookInstanceName",
            )?,
            instance_type: required(self.instance_type, SHAPE, "InstanceType")?,
            subnet_id: self.subnet_id,
            security_group_ids: self.security_group_ids,
            role_arn: required(self.role_arn, SHAPE, "RoleArn")?,
            kms_key_id: self.kms_key_id,
            tags: self.tags,
            lifecycle_config_name: self.lifecycle_config_name,
            direct_internet_access: self.direct_internet_access,
            volume_size_in_gb: self.volume_size_in_gb,
            accelerator_types: self.accelerator_types,
            default_code_repository: self.default_code_repository,
            additional_code_repositories: self.additional_code_repositories,
            root_access: self.root_access,
        })
    }
}

/// Response shape for CreateNotebookInstance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNotebookInstanceResult {
    /// ARN of the created notebook instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_instance_arn: Option<Arn>,
}

/// Request shape for the UpdateNotebookInstance operation.
///
/// Only the name is mandatory. The `disassociate_*` flags clear a
/// previously associated value; setting a field and its disassociate flag
/// in the same request is rejected by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateNotebookInstanceRequest {
    /// Name of the notebook instance to update.
    pub notebook_instance_name: ResourceName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<NotebookInstanceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Arn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_name: Option<ResourceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disassociate_lifecycle_config: Option<bool>,
    /// Volume size can only grow. Shrinking requires recreating the
    /// instance.
    #[serde(
        rename = "VolumeSizeInGB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_size_in_gb: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_code_repositories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accelerator_types: Vec<NotebookAcceleratorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disassociate_accelerator_types: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disassociate_default_code_repository: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disassociate_additional_code_repositories: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_access: Option<RootAccess>,
}

impl UpdateNotebookInstanceRequest {
    /// Start building an update request for the named instance.
    pub fn builder(notebook_instance_name: ResourceName) -> UpdateNotebookInstanceRequestBuilder {
        UpdateNotebookInstanceRequestBuilder {
            request: UpdateNotebookInstanceRequest {
                notebook_instance_name,
                instance_type: None,
                role_arn: None,
                lifecycle_config_name: None,
                disassociate_lifecycle_config: None,
                volume_size_in_gb: None,
                default_code_repository: None,
                additional_code_repositories: Vec::new(),
                accelerator_types: Vec::new(),
                disassociate_accelerator_types: None,
                disassociate_default_code_repository: None,
                disassociate_additional_code_repositories: None,
                root_access: None,
            },
        }
    }
}

/// Builder for [`UpdateNotebookInstanceRequest`]. The single mandatory
/// field is taken up front, so `build()` is infallible.
#[derive(Debug)]
pub struct UpdateNotebookInstanceRequestBuilder {
    request: UpdateNotebookInstanceRequest,
}

impl UpdateNotebookInstanceRequestBuilder {
    /// Change the instance type.
    pub fn instance_type(mut self, instance_type: NotebookInstanceType) -> Self {
        self.request.instance_type = Some(instance_type);
        self
    }

    /// Change the execution role.
    pub fn role_arn(mut self, role_arn: Arn) -> Self {
        self.request.role_arn = Some(role_arn);
        self
    }

    /// Change the lifecycle configuration.
    pub fn lifecycle_config_name(mut self, name: ResourceName) -> Self {
        self.request.lifecycle_config_name = Some(name);
        self
    }

    /// Remove the lifecycle configuration association.
    pub fn disassociate_lifecycle_config(mut self) -> Self {
        self.request.disassociate_lifecycle_config = Some(true);
        self
    }

    /// Grow the storage volume.
    pub fn volume_size_in_gb(mut self, size: i32) -> Self {
        self.request.volume_size_in_gb = Some(size);
        self
    }

    /// Change the default code repository.
    pub fn default_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.request.default_code_repository = Some(repository.into());
        self
    }

    /// Add an additional code repository.
    pub fn additional_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.request.additional_code_repositories.push(repository.into());
        self
    }

    /// Add an elastic-inference accelerator.
    pub fn accelerator_type(mut self, accelerator: NotebookAcceleratorType) -> Self {
        self.request.accelerator_types.push(accelerator);
        self
    }

    /// Remove all accelerator associations.
    pub fn disassociate_accelerator_types(mut self) -> Self {
        self.request.disassociate_accelerator_types = Some(true);
        self
    }

    /// Remove the default code repository association.
    pub fn disassociate_default_code_repository(mut self) -> Self {
        self.request.disassociate_default_code_repository = Some(true);
        self
    }

    /// Remove the additional code repository associations.
    pub fn disassociate_additional_code_repositories(mut self) -> Self {
        self.request.disassociate_additional_code_repositories = Some(true);
        self
    }

    /// Change root access.
    pub fn root_access(mut self, access: RootAccess) -> Self {
        self.request.root_access = Some(access);
        self
    }

    /// Finalize the request.
    pub fn build(self) -> UpdateNotebookInstanceRequest {
        self.request
    }
}

/// Response shape for UpdateNotebookInstance. Carries no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNotebookInstanceResult {}

/// Request shape for the DescribeNotebookInstance operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNotebookInstanceRequest {
    /// Name of the notebook instance to describe.
    pub notebook_instance_name: ResourceName,
}

impl DescribeNotebookInstanceRequest {
    /// Describe the named instance.
    pub fn new(notebook_instance_name: ResourceName) -> Self {
        Self {
            notebook_instance_name,
        }
    }
}

/// Response shape for DescribeNotebookInstance.
///
/// All fields are optional on the wire; which ones are present depends on
/// the instance's state (for example `failure_reason` only accompanies
/// `Failed`, and `url` only an `InService` instance).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNotebookInstanceResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_instance_arn: Option<Arn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<ResourceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_instance_status: Option<NotebookInstanceStatus>,
    /// Why the instance failed, when status is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Address to connect to the notebook environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<NotebookInstanceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Arn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Network interface the platform created in the subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_instance_lifecycle_config_name: Option<ResourceName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_internet_access: Option<DirectInternetAccess>,
    #[serde(
        rename = "VolumeSizeInGB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_size_in_gb: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accelerator_types: Vec<NotebookAcceleratorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_code_repositories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_access: Option<RootAccess>,
}
