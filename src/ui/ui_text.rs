/// Every user-visible string in one place
pub struct UiText {
    pub window_title: &'static str,
    pub app_heading: &'static str,
    pub symbol_hint: &'static str,
    pub check_button: &'static str,
    pub check_button_tooltip: &'static str,
    pub chart_heading: &'static str,
    pub label_symbol: &'static str,
    pub label_current_price: &'static str,
    pub label_ema55: &'static str,
    pub label_difference: &'static str,
    pub label_recommendation: &'static str,
    pub chart_candles: &'static str,
    pub chart_ema55: &'static str,
    pub chart_y_axis: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "EMA Insight",
    app_heading: "Custom Symbol EMA Insight",
    symbol_hint: "e.g. btc-usd",
    check_button: "Check",
    check_button_tooltip: "Fetch the EMA55 recommendation and recent history",
    chart_heading: "Price & EMA55 (7 days, 4 hour intervals)",
    label_symbol: "Symbol",
    label_current_price: "Current Price",
    label_ema55: "EMA55",
    label_difference: "Difference",
    label_recommendation: "Recommendation",
    chart_candles: "Price",
    chart_ema55: "EMA55",
    chart_y_axis: "Price",
};
