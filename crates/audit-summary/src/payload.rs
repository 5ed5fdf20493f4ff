//! Summary payload and prompt.

use serde::Serialize;

use audit_model::{Asset, AssetStatus};

use crate::error::Result;

/// Maximum number of missing and extra items sampled into the payload.
pub const SAMPLE_LIMIT: usize = 10;

/// Counts and samples sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPayload {
    /// Records that came from the imported list.
    pub total_assets_expected: usize,
    /// Imported records that were scanned.
    pub found_count: usize,
    /// Imported records still pending.
    pub missing_count: usize,
    /// Records scanned but absent from the imported list.
    pub extra_count: usize,
    /// `name (location)` of up to [`SAMPLE_LIMIT`] missing records.
    pub missing_items_sample: Vec<String>,
    /// `name (barcode)` of up to [`SAMPLE_LIMIT`] extra records.
    pub extra_items_sample: Vec<String>,
}

impl SummaryPayload {
    /// Builds the payload from the final asset list.
    pub fn from_assets(assets: &[Asset]) -> Self {
        let with_status =
            |status: AssetStatus| assets.iter().filter(move |asset| asset.status == status);
        let extra_count = with_status(AssetStatus::Extra).count();
        Self {
            total_assets_expected: assets.len() - extra_count,
            found_count: with_status(AssetStatus::Found).count(),
            missing_count: with_status(AssetStatus::Pending).count(),
            extra_count,
            missing_items_sample: with_status(AssetStatus::Pending)
                .take(SAMPLE_LIMIT)
                .map(|asset| format!("{} ({})", asset.name, asset.location_or_unknown()))
                .collect(),
            extra_items_sample: with_status(AssetStatus::Extra)
                .take(SAMPLE_LIMIT)
                .map(|asset| format!("{} ({})", asset.name, asset.barcode))
                .collect(),
        }
    }
}

/// Embeds the payload, as pretty JSON, in the auditor instructions.
pub fn build_prompt(payload: &SummaryPayload) -> Result<String> {
    let data = serde_json::to_string_pretty(payload)?;
    Ok(format!(
        "你是一位专业的资产盘点审计员。请分析以下盘点数据摘要：\n\
         {data}\n\
         \n\
         请为这次资产盘点提供一份简明、专业的执行摘要（请使用中文回答）。\n\
         1. 计算盘点准确率（百分比）。\n\
         2. 针对缺失的资产（“Missing”）指出任何显著的关注点（例如，如果缺失物品在特定位置或类型上有规律）。\n\
         3. 对发现的额外资产（“Extra”）提出后续处理建议。\n\
         4. 保持语气正式且有帮助。\n\
         5. 不要过度使用 Markdown 加粗，保持排版整洁。\n"
    ))
}
