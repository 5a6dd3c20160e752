//! Prompt assembly for the narrative request.

use crate::analysis::AnalysisRequest;

/// Analyst persona pinned on every request, including the zh-TW output
/// locale.
pub(crate) const SYSTEM_INSTRUCTION: &str = "You are an expert financial risk analyst specializing in the Taiwan stock futures market (TAIFEX). Your goal is to provide deep insights into the risks of specific stock futures based on provided parameters. Consider historical volatility of Taiwan stocks, typical margin call thresholds (usually when maintenance margin is breached), and leverage risks. Output must be in Traditional Chinese (zh-TW).";

/// User prompt embedding the five request parameters and asking for the
/// three sections the response schema enforces.
pub(crate) fn user_prompt(request: &AnalysisRequest) -> String {
    format!(
        "分析以下股票期貨合約的交易風險：\n\
         - 合約名稱: {name} ({stock})\n\
         - 當前股價: {price} TWD\n\
         - 使用槓桿: {leverage:.2}x\n\
         - 原始保證金需求: {margin} TWD\n\
         \n\
         請針對以下三個維度提供簡潔專業的分析：\n\
         1. 槓桿風險：解釋此槓桿倍數下的資產波動放大效應。\n\
         2. 追繳風險：預估股價向不利方向變動多少百分比可能觸發維持保證金不足。\n\
         3. 專業建議：提供針對此標的特性的具體資金管理或止損建議。",
        name = request.contract_name,
        stock = request.stock_code,
        price = request.price,
        leverage = request.leverage,
        margin = group_thousands(request.margin_requirement),
    )
}

/// Thousands-grouped TWD figure with up to three fraction digits, trailing
/// zeros trimmed.
pub(crate) fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + frac.len() + 2);
    for (index, ch) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }

    if value < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
