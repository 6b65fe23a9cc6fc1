//! Утилиты форматирования чисел для таблиц и карточек

/// Вставляет разделитель тысяч (запятая) в целую часть числа
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Цена в долларах с двумя знаками: `1234.5` -> `$1,234.50`
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(integer_part), decimal_part)
}

/// Остаток на складе: `5` -> `5 units`
pub fn format_stock(stock: i64) -> String {
    let count = group_thousands(&stock.to_string());
    if stock == 1 {
        format!("{} unit", count)
    } else {
        format!("{} units", count)
    }
}
