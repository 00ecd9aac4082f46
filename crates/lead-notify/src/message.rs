use lead_core::Lead;

/// Renders the operator-facing alert text for one lead.
///
/// Absent optional fields render as "-" so the message keeps a fixed shape.
pub fn format_lead_message(lead: &Lead) -> String {
    format!(
        "🚗 Новая заявка на пригон авто\n\n\
         Имя: {}\n\
         Телефон/Telegram: {}\n\
         Модель: {}\n\
         Бюджет: {}\n\
         Email: {}\n\
         Комментарий: {}\n",
        lead.name,
        lead.phone,
        lead.car_model.as_deref().unwrap_or("-"),
        lead.budget.as_deref().unwrap_or("-"),
        lead.email.as_deref().unwrap_or("-"),
        lead.message.as_deref().unwrap_or("-"),
    )
}
