//! Deterministic local narrative used whenever generation fails.

use crate::analysis::{AnalysisRequest, RiskAnalysis};

/// Template narrative computed from inputs already in hand.
///
/// Pure and infallible: this is the terminal branch of the narrative path,
/// so it must not perform I/O or carry an error path of its own. The leverage
/// figure is interpolated; the 15-20% adverse-move band and the 30% capital
/// buffer are fixed qualitative guidance, not derived from the contract's
/// ratios.
pub fn fallback_analysis(request: &AnalysisRequest) -> RiskAnalysis {
    RiskAnalysis {
        leverage_risk: format!(
            "當前槓桿約為 {leverage:.1} 倍。這意味著底層股票 1% 的波動將放大為保證金帳戶約 {leverage:.1}% 的盈虧變動。",
            leverage = request.leverage
        ),
        margin_call_risk: String::from(
            "若股價朝不利方向變動超過約 15-20%，帳戶淨值可能低於維持保證金水平，面臨追繳風險。",
        ),
        recommendation: String::from(
            "建議至少準備合約價值 30% 以上的資金作為緩衝，避免在極端波動中被強制平倉。",
        ),
    }
}
