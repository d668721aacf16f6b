use chrono::{DateTime, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vitrine::model::{Brand, Category, Product};

const LINE_WIDTH: usize = 100;
const PRICE_WIDTH: usize = 16;
const FEATURED_MARKER: &str = "★";

pub(crate) fn print_products(products: &[Product], total: usize, has_more: bool) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    for product in products {
        let marker = if product.is_featured {
            format!("{} ", FEATURED_MARKER).yellow().to_string()
        } else {
            "  ".to_string()
        };

        let price = format!("{:>width$}", format_price(product.price), width = PRICE_WIDTH);
        let discount = if product.discount > 0 {
            format!("  -{}%", product.discount)
        } else {
            String::new()
        };

        let fixed_width = 2 + 6 + PRICE_WIDTH + discount.width();
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name = truncate_to_width(&product.name, available);
        let padding = available.saturating_sub(name.width());

        let name_colored = if product.in_stock() {
            name.normal()
        } else {
            name.dimmed()
        };

        println!(
            "{}{:<6}{}{}{}{}",
            marker,
            format!("{}.", product.id),
            name_colored,
            " ".repeat(padding),
            price.bold(),
            discount.green()
        );
    }

    let shown = products.len();
    if has_more {
        println!(
            "\n{}",
            format!(
                "Showing {} of {} products ({} more; rerun with --pages or --all)",
                shown,
                total,
                total - shown
            )
            .dimmed()
        );
    } else {
        println!("\n{}", format!("Showing all {} products", total).dimmed());
    }
}

pub(crate) fn print_product_detail(product: &Product) {
    let marker = if product.is_featured {
        format!(" {}", FEATURED_MARKER).yellow().to_string()
    } else {
        String::new()
    };
    println!("{}{}", product.name.bold(), marker);
    println!("--------------------------------");

    if product.discount > 0 && product.original_price > product.price {
        println!(
            "Price:    {}  {}  {}",
            format_price(product.price).bold(),
            format_price(product.original_price).strikethrough().dimmed(),
            format!("-{}%", product.discount).green()
        );
    } else {
        println!("Price:    {}", format_price(product.price).bold());
    }

    println!("Year:     {}", product.manufacturing_year);
    if !product.origin.is_empty() {
        println!("Origin:   {}", product.origin);
    }
    if product.in_stock() {
        println!("Stock:    {}", product.stock);
    } else {
        println!("Stock:    {}", "sold out".red());
    }

    let specs = &product.specifications;
    for (label, value) in [
        ("Screen", &specs.screen),
        ("RAM", &specs.ram),
        ("Storage", &specs.storage),
        ("Battery", &specs.battery),
        ("OS", &specs.os),
    ] {
        if !value.is_empty() {
            println!("{:<9} {}", format!("{}:", label), value);
        }
    }

    if !product.tags.is_empty() {
        println!("Tags:     {}", product.tags.join(", ").dimmed());
    }
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }
    println!(
        "\n{}",
        format!("added {}", format_time_ago(product.created_at)).dimmed()
    );
}

pub(crate) fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("No categories found.");
        return;
    }
    for category in categories {
        println!("{:<6}{}", format!("{}.", category.id), category.name);
    }
}

pub(crate) fn print_brands(brands: &[Brand]) {
    if brands.is_empty() {
        println!("No brands found.");
        return;
    }
    for brand in brands {
        let country = if brand.country.is_empty() {
            String::new()
        } else {
            format!("  ({})", brand.country).dimmed().to_string()
        };
        println!("{:<6}{}{}", format!("{}.", brand.id), brand.name, country);
    }
}

/// VND with dot thousands separators: 5000000 → "5.000.000 ₫".
pub(crate) fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{} ₫", grouped)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(0), "0 ₫");
        assert_eq!(format_price(500), "500 ₫");
        assert_eq!(format_price(5_000), "5.000 ₫");
        assert_eq!(format_price(5_000_000), "5.000.000 ₫");
        assert_eq!(format_price(28_990_000), "28.990.000 ₫");
        assert_eq!(format_price(999_999_999), "999.999.999 ₫");
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_to_width("iPhone 15", 50), "iPhone 15");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        let truncated = truncate_to_width("Galaxy S24 Ultra 512GB Titanium", 12);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 12);
    }
}
