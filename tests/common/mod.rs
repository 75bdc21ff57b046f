use rewards_engine::models::PurchaseEntry;

/// Helper to create a purchase entry with all fields
pub fn make_entry(date: &str, item: &str, amount: &str) -> PurchaseEntry {
    PurchaseEntry {
        date: date.to_string(),
        item: item.to_string(),
        amount: amount.to_string(),
    }
}

/// Process a CSV string through the batch pipeline and return the output
pub fn process_csv_string(csv_input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    rewards_engine::process_purchases(csv_input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output)?)
}

/// Create a test CSV from a list of purchase rows
pub fn build_csv(purchases: &[(&str, &str, &str)]) -> String {
    let mut csv = String::from("date,item,amount\n");

    for (date, item, amount) in purchases {
        csv.push_str(&format!("{},{},{}\n", date, item, amount));
    }

    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_entry() {
        let entry = make_entry("2025-01-01", "book", "100.00");
        assert_eq!(entry.date, "2025-01-01");
        assert_eq!(entry.item, "book");
        assert_eq!(entry.amount, "100.00");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[("2025-01-01", "book", "100.00"), ("2025-01-02", "pen", "2.50")]);

        assert!(csv.starts_with("date,item,amount\n"));
        assert!(csv.contains("2025-01-01,book,100.00"));
        assert!(csv.contains("2025-01-02,pen,2.50"));
    }

    #[test]
    fn test_process_csv_string() {
        let csv = "date,item,amount\n2025-01-01,book,100.00\n";
        let output = process_csv_string(csv).unwrap();

        assert!(output.contains("id,date,item,amount,points,credit"));
        assert!(output.contains("2025-01-01,book,100.00,10,5.00"));
    }
}
