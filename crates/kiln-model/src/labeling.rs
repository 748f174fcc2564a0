//! # Human-in-the-Loop Shapes
//!
//! Shapes configuring human work on data objects: the labeling task
//! handed to a workteam ([`HumanTaskConfig`]) and the review loop
//! triggered from a flow definition ([`HumanLoopConfig`]). Both carry
//! the worker-facing task card (title, description, time limits) plus
//! pricing for public workforces.

use kiln_core::{Arn, ModelError};
use serde::{Deserialize, Serialize};

use crate::required;

/// The worker UI template for a labeling task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UiConfig {
    /// S3 location of the Liquid HTML template rendered to workers.
    pub ui_template_s3_uri: String,
}

/// Function that merges annotations from multiple workers into one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnnotationConsolidationConfig {
    pub annotation_consolidation_lambda_arn: Arn,
}

/// A US-dollar amount split into dollars, cents, and tenth-fractions of
/// a cent, as priced on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Usd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dollars: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cents: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenth_fractions_of_a_cent: Option<i32>,
}

/// Price paid per task when using a public workforce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublicWorkforceTaskPrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_usd: Option<Usd>,
}

/// How a labeling job presents data objects to human workers.
///
/// Construct via [`HumanTaskConfig::builder`]; the workteam, UI
/// template, pre-task function, task card, worker count, and time limit
/// are all mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HumanTaskConfig {
    pub workteam_arn: Arn,
    pub ui_config: UiConfig,
    /// Function run on each data object before it is shown to workers.
    pub pre_human_task_lambda_arn: Arn,
    /// Keywords used to find tasks in a public marketplace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub task_keywords: Vec<String>,
    pub task_title: String,
    pub task_description: String,
    /// Workers labeling each data object independently.
    pub number_of_human_workers_per_data_object: i32,
    /// Seconds a worker has to complete one task.
    pub task_time_limit_in_seconds: i32,
    /// Seconds a task stays claimable before expiring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_availability_lifetime_in_seconds: Option<i32>,
    /// Data objects sent to workers concurrently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_task_count: Option<i32>,
    pub annotation_consolidation_config: AnnotationConsolidationConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_workforce_task_price: Option<PublicWorkforceTaskPrice>,
}

impl HumanTaskConfig {
    /// Start building a task configuration.
    pub fn builder() -> HumanTaskConfigBuilder {
        HumanTaskConfigBuilder::default()
    }
}

/// Builder for [`HumanTaskConfig`].
#[derive(Debug, Default)]
pub struct HumanTaskConfigBuilder {
    workteam_arn: Option<Arn>,
    ui_config: Option<UiConfig>,
    pre_human_task_lambda_arn: Option<Arn>,
    task_keywords: Vec<String>,
    task_title: Option<String>,
    task_description: Option<String>,
    number_of_human_workers_per_data_object: Option<i32>,
    task_time_limit_in_seconds: Option<i32>,
    task_availability_lifetime_in_seconds: Option<i32>,
    max_concurrent_task_count: Option<i32>,
    annotation_consolidation_config: Option<AnnotationConsolidationConfig>,
    public_workforce_task_price: Option<PublicWorkforceTaskPrice>,
}

impl HumanTaskConfigBuilder {
    /// Set the workteam that receives the tasks. Required.
    pub fn workteam_arn(mut self, arn: Arn) -> Self {
        self.workteam_arn = Some(arn);
        self
    }

    /// Set the worker UI template. Required.
    pub fn ui_config(mut self, config: UiConfig) -> Self {
        self.ui_config = Some(config);
        self
    }

    /// Set the pre-task function. Required.
    pub fn pre_human_task_lambda_arn(mut self, arn: Arn) -> Self {
        self.pre_human_task_lambda_arn = Some(arn);
        self
    }

    /// Add a discovery keyword.
    pub fn task_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.task_keywords.push(keyword.into());
        self
    }

    /// Set the task title shown to workers. Required.
    pub fn task_title(mut self, title: impl Into<String>) -> Self {
        self.task_title = Some(title.into());
        self
    }

    /// Set the task description shown to workers. Required.
    pub fn task_description(mut self, description: impl Into<String>) -> Self {
        self.task_description = Some(description.into());
        self
    }

    /// Set how many workers label each data object. Required.
    pub fn number_of_human_workers_per_data_object(mut self, count: i32) -> Self {
        self.number_of_human_workers_per_data_object = Some(count);
        self
    }

    /// Set the per-task time limit. Required.
    pub fn task_time_limit_in_seconds(mut self, seconds: i32) -> Self {
        self.task_time_limit_in_seconds = Some(seconds);
        self
    }

    /// Set how long tasks stay claimable.
    pub fn task_availability_lifetime_in_seconds(mut self, seconds: i32) -> Self {
        self.task_availability_lifetime_in_seconds = Some(seconds);
        self
    }

    /// Set the concurrent task ceiling.
    pub fn max_concurrent_task_count(mut self, count: i32) -> Self {
        self.max_concurrent_task_count = Some(count);
        self
    }

    /// Set the annotation consolidation function. Required.
    pub fn annotation_consolidation_config(
        mut self,
        config: AnnotationConsolidationConfig,
    ) -> Self {
        self.annotation_consolidation_config = Some(config);
        self
    }

    /// Set the per-task price for a public workforce.
    pub fn public_workforce_task_price(mut self, price: PublicWorkforceTaskPrice) -> Self {
        self.public_workforce_task_price = Some(price);
        self
    }

    /// Finalize the configuration.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingField`] naming the first absent required
    /// field.
    pub fn build(self) -> Result<HumanTaskConfig, ModelError> {
        const SHAPE: &str = "HumanTaskConfig";
        Ok(HumanTaskConfig {
            workteam_arn: required(self.workteam_arn, SHAPE, "WorkteamArn")?,
            ui_config: required(self.ui_config, SHAPE, "UiConfig")?,
            pre_human_task_lambda_arn: required(
                self.pre_human_task_lambda_arn,
                SHAPE,
                "PreHumanTaskLambdaArn",
            )?,
            task_keywords: self.task_keywords,
            task_title: required(self.task_title, SHAPE, "TaskTitle")?,
            task_description: required(self.task_description, SHAPE, "TaskDescription")?,
            number_of_human_workers_per_data_object: required(
                self.number_of_human_workers_per_data_object,
                SHAPE,
                "NumberOfHumanWorkersPerDataObject",
            )?,
            task_time_limit_in_seconds: required(
                self.task_time_limit_in_seconds,
                SHAPE,
                "TaskTimeLimitInSeconds",
            )?,
            task_availability_lifetime_in_seconds: self.task_availability_lifetime_in_seconds,
            max_concurrent_task_count: self.max_concurrent_task_count,
            annotation_consolidation_config: required(
                self.annotation_consolidation_config,
                SHAPE,
                "AnnotationConsolidationConfig",
            )?,
            public_workforce_task_price: self.public_workforce_task_price,
        })
    }
}

/// Human review loop attached to a flow definition.
///
/// Construct via [`HumanLoopConfig::builder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HumanLoopConfig {
    pub workteam_arn: Arn,
    /// The worker task UI used for review.
    pub human_task_ui_arn: Arn,
    pub task_title: String,
    pub task_description: String,
    /// Workers reviewing each loop.
    pub task_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_availability_lifetime_in_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_time_limit_in_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub task_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_workforce_task_price: Option<PublicWorkforceTaskPrice>,
}

impl HumanLoopConfig {
    /// Start building a review-loop configuration.
    pub fn builder() -> HumanLoopConfigBuilder {
        HumanLoopConfigBuilder::default()
    }
}

/// Builder for [`HumanLoopConfig`].
#[derive(Debug, Default)]
pub struct HumanLoopConfigBuilder {
    workteam_arn: Option<Arn>,
    human_task_ui_arn: Option<Arn>,
    task_title: Option<String>,
    task_description: Option<String>,
    task_count: Option<i32>,
    task_availability_lifetime_in_seconds: Option<i32>,
    task_time_limit_in_seconds: Option<i32>,
    task_keywords: Vec<String>,
    public_workforce_task_price: Option<PublicWorkforceTaskPrice>,
}

impl HumanLoopConfigBuilder {
    /// Set the reviewing workteam. Required.
    pub fn workteam_arn(mut self, arn: Arn) -> Self {
        self.workteam_arn = Some(arn);
        self
    }

    /// Set the worker task UI. Required.
    pub fn human_task_ui_arn(mut self, arn: Arn) -> Self {
        self.human_task_ui_arn = Some(arn);
        self
    }

    /// Set the task title. Required.
    pub fn task_title(mut self, title: impl Into<String>) -> Self {
        self.task_title = Some(title.into());
        self
    }

    /// Set the task description. Required.
    pub fn task_description(mut self, description: impl Into<String>) -> Self {
        self.task_description = Some(description.into());
        self
    }

    /// Set how many workers review each loop. Required.
    pub fn task_count(mut self, count: i32) -> Self {
        self.task_count = Some(count);
        self
    }

    /// Set how long tasks stay claimable.
    pub fn task_availability_lifetime_in_seconds(mut self, seconds: i32) -> Self {
        self.task_availability_lifetime_in_seconds = Some(seconds);
        self
    }

    /// Set the per-task time limit.
    pub fn task_time_limit_in_seconds(mut self, seconds: i32) -> Self {
        self.task_time_limit_in_seconds = Some(seconds);
        self
    }

    /// Add a discovery keyword.
    pub fn task_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.task_keywords.push(keyword.into());
        self
    }

    /// Set the per-task price for a public workforce.
    pub fn public_workforce_task_price(mut self, price: PublicWorkforceTaskPrice) -> Self {
        self.public_workforce_task_price = Some(price);
        self
    }

    /// Finalize the configuration.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingField`] naming the first absent required
    /// field.
    pub fn build(self) -> Result<HumanLoopConfig, ModelError> {
        const SHAPE: &str = "HumanLoopConfig";
        Ok(HumanLoopConfig {
            workteam_arn: required(self.workteam_arn, SHAPE, "WorkteamArn")?,
            human_task_ui_arn: required(self.human_task_ui_arn, SHAPE, "HumanTaskUiArn")?,
            task_title: required(self.task_title, SHAPE, "TaskTitle")?,
            task_description: required(self.task_description, SHAPE, "TaskDescription")?,
            task_count: required(self.task_count, SHAPE, "TaskCount")?,
            task_availability_lifetime_in_seconds: self.task_availability_lifetime_in_seconds,
            task_time_limit_in_seconds: self.task_time_limit_in_seconds,
            task_keywords: self.task_keywords,
            public_workforce_task_price: self.public_workforce_task_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workteam() -> Arn {
        Arn::new("arn:aws:kiln:us-east-1:123456789012:workteam/private-crowd/annotators")
            .unwrap()
    }

    #[test]
    fn test_human_task_config_builds_and_encodes() {
        let config = HumanTaskConfig::builder()
            .workteam_arn(workteam())
            .ui_config(UiConfig {
                ui_template_s3_uri: "s3://kiln-templates/bbox.liquid.html".into(),
            })
            .pre_human_task_lambda_arn(
                Arn::new("arn:aws:lambda:us-east-1:123456789012:function:PreBbox").unwrap(),
            )
            .task_keyword("images")
            .task_title("Draw bounding boxes")
            .task_description("Draw a tight box around every vehicle.")
            .number_of_human_workers_per_data_object(3)
            .task_time_limit_in_seconds(300)
            .annotation_consolidation_config(AnnotationConsolidationConfig {
                annotation_consolidation_lambda_arn: Arn::new(
                    "arn:aws:lambda:us-east-1:123456789012:function:ConsolidateBbox",
                )
                .unwrap(),
            })
            .build()
            .unwrap();

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["TaskKeywords"], json!(["images"]));
        assert_eq!(value["NumberOfHumanWorkersPerDataObject"], json!(3));
        assert_eq!(value["TaskTimeLimitInSeconds"], json!(300));
        assert!(value.get("MaxConcurrentTaskCount").is_none());
    }

    #[test]
    fn test_human_task_config_missing_ui_config() {
        let err = HumanTaskConfig::builder()
            .workteam_arn(workteam())
            .pre_human_task_lambda_arn(
                Arn::new("arn:aws:lambda:us-east-1:123456789012:function:PreBbox").unwrap(),
            )
            .task_title("Draw bounding boxes")
            .task_description("Draw a tight box around every vehicle.")
            .number_of_human_workers_per_data_object(3)
            .task_time_limit_in_seconds(300)
            .annotation_consolidation_config(AnnotationConsolidationConfig {
                annotation_consolidation_lambda_arn: Arn::new(
                    "arn:aws:lambda:us-east-1:123456789012:function:ConsolidateBbox",
                )
                .unwrap(),
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingField {
                shape: "HumanTaskConfig",
                field: "UiConfig",
            }
        ));
    }

    #[test]
    fn test_usd_price_round_trips() {
        let price = PublicWorkforceTaskPrice {
            amount_in_usd: Some(Usd {
                dollars: Some(0),
                cents: Some(3),
                tenth_fractions_of_a_cent: Some(6),
            }),
        };
        let json = serde_json::to_string(&price).unwrap();
        let back: PublicWorkforceTaskPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn test_human_loop_config_builds() {
        let config = HumanLoopConfig::builder()
            .workteam_arn(workteam())
            .human_task_ui_arn(
                Arn::new("arn:aws:kiln:us-east-1:123456789012:human-task-ui/review").unwrap(),
            )
            .task_title("Review low-confidence predictions")
            .task_description("Confirm or correct the model's label.")
            .task_count(1)
            .build()
            .unwrap();
        assert_eq!(config.task_count, 1);
        assert!(config.task_time_limit_in_seconds.is_none());

        let err = HumanLoopConfig::builder()
            .workteam_arn(workteam())
            .task_title("Review low-confidence predictions")
            .task_description("Confirm or correct the model's label.")
            .task_count(1)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingField {
                shape: "HumanLoopConfig",
                field: "HumanTaskUiArn",
            }
        ));
    }
}
