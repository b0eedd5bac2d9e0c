use prettytable::{
    format::{LinePosition, LineSeparator, TableFormat},
    row,
    Table,
};
use sneaker_match_engine::{
    db_types::{Match, Notification, User, WantEntry, WantListKind},
    matching::{MatchCandidate, RiskLevel},
};

fn markdown_format() -> TableFormat {
    prettytable::format::FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

fn credibility(score: Option<i64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".into())
}

pub fn format_user(user: &User) -> String {
    format!("User #{} ({}). Credibility: {}", user.id, user.username, credibility(user.credibility_score))
}

pub fn format_want_list(user_id: i64, kind: WantListKind, entries: &[WantEntry]) -> String {
    if entries.is_empty() {
        return format!("User #{user_id} has no {kind} entries");
    }
    let mut table = Table::new();
    table.set_format(markdown_format());
    table.set_titles(row!["ID", "SKU", "Size", "Qty"]);
    entries.iter().for_each(|e| {
        table.add_row(row![e.id, e.product_sku, e.size, e.quantity]);
    });
    format!("{kind} list for user #{user_id}\n{table}")
}

pub fn format_candidates(candidates: &[MatchCandidate]) -> String {
    if candidates.is_empty() {
        return "No matches found".to_string();
    }
    let mut table = Table::new();
    table.set_format(markdown_format());
    table.set_titles(row!["Rank", "User", "Score", "Credibility", "Risk", "Overlap"]);
    candidates.iter().enumerate().for_each(|(i, c)| {
        let overlap = c.overlap.iter().map(|e| format!("{}/{}", e.product_sku, e.size)).collect::<Vec<_>>().join(", ");
        table.add_row(row![
            i + 1,
            format!("#{} {}", c.counterparty.id, c.counterparty.username),
            format!("{:.2}", c.match_score),
            credibility(c.credibility_score),
            RiskLevel::from(c.credibility_score),
            overlap
        ]);
    });
    table.to_string()
}

pub fn format_matches(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No recorded matches".to_string();
    }
    let mut table = Table::new();
    table.set_format(markdown_format());
    table.set_titles(row!["ID", "Buyer", "Seller", "Score", "Status", "Created At"]);
    matches.iter().for_each(|m| {
        table.add_row(row![
            m.id,
            m.buyer_id,
            m.seller_id,
            format!("{:.2}", m.match_score),
            m.status,
            m.created_at.to_string()
        ]);
    });
    table.to_string()
}

pub fn format_notifications(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return "No notifications".to_string();
    }
    let mut table = Table::new();
    table.set_format(markdown_format());
    table.set_titles(row!["ID", "Type", "Match", "Read", "Message", "Created At"]);
    notifications.iter().for_each(|n| {
        table.add_row(row![
            n.id,
            n.notification_type,
            n.match_id.map(|id| id.to_string()).unwrap_or_default(),
            if n.is_read { "yes" } else { "" },
            n.message,
            n.created_at.to_string()
        ]);
    });
    table.to_string()
}
