//! Color reference table.

use serde::Serialize;

/// A color entry: Persian display name, English name and hex code as the
/// secondary labels shown alongside draw results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    /// Persian display name.
    pub name: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Hex code in `#RRGGBB` form.
    pub hex: &'static str,
}

/// The ordered color table.
///
/// The color panel's `pool_size` field restricts draws to a prefix of this
/// table, so the ordering is part of the contract: common colors first.
pub static COLORS: &[Color] = &[
    Color { name: "قرمز", name_en: "Red", hex: "#FF0000" },
    Color { name: "آبی", name_en: "Blue", hex: "#0000FF" },
    Color { name: "سبز", name_en: "Green", hex: "#008000" },
    Color { name: "زرد", name_en: "Yellow", hex: "#FFFF00" },
    Color { name: "نارنجی", name_en: "Orange", hex: "#FFA500" },
    Color { name: "بنفش", name_en: "Purple", hex: "#800080" },
    Color { name: "صورتی", name_en: "Pink", hex: "#FFC0CB" },
    Color { name: "قهوه‌ای", name_en: "Brown", hex: "#A52A2A" },
    Color { name: "مشکی", name_en: "Black", hex: "#000000" },
    Color { name: "سفید", name_en: "White", hex: "#FFFFFF" },
    Color { name: "خاکستری", name_en: "Gray", hex: "#808080" },
    Color { name: "فیروزه‌ای", name_en: "Turquoise", hex: "#40E0D0" },
    Color { name: "سرمه‌ای", name_en: "Navy", hex: "#000080" },
    Color { name: "طلایی", name_en: "Gold", hex: "#FFD700" },
    Color { name: "نقره‌ای", name_en: "Silver", hex: "#C0C0C0" },
    Color { name: "کرم", name_en: "Cream", hex: "#FFFDD0" },
    Color { name: "بژ", name_en: "Beige", hex: "#F5F5DC" },
    Color { name: "زیتونی", name_en: "Olive", hex: "#808000" },
    Color { name: "یشمی", name_en: "Jade", hex: "#00A86B" },
    Color { name: "سبز چمنی", name_en: "Lawn Green", hex: "#7CFC00" },
    Color { name: "سبز دریایی", name_en: "Sea Green", hex: "#2E8B57" },
    Color { name: "آبی آسمانی", name_en: "Sky Blue", hex: "#87CEEB" },
    Color { name: "لاجوردی", name_en: "Azure", hex: "#007FFF" },
    Color { name: "نیلی", name_en: "Indigo", hex: "#4B0082" },
    Color { name: "ارغوانی", name_en: "Magenta", hex: "#FF00FF" },
    Color { name: "یاسی", name_en: "Lilac", hex: "#C8A2C8" },
    Color { name: "بادمجانی", name_en: "Eggplant", hex: "#614051" },
    Color { name: "گلبهی", name_en: "Salmon Pink", hex: "#FA8072" },
    Color { name: "مرجانی", name_en: "Coral", hex: "#FF7F50" },
    Color { name: "عنابی", name_en: "Maroon", hex: "#800000" },
    Color { name: "زرشکی", name_en: "Crimson", hex: "#DC143C" },
    Color { name: "آجری", name_en: "Brick", hex: "#B22222" },
    Color { name: "مسی", name_en: "Copper", hex: "#B87333" },
    Color { name: "برنزی", name_en: "Bronze", hex: "#CD7F32" },
    Color { name: "خردلی", name_en: "Mustard", hex: "#FFDB58" },
    Color { name: "لیمویی", name_en: "Lemon", hex: "#FFF700" },
    Color { name: "پسته‌ای", name_en: "Pistachio", hex: "#93C572" },
    Color { name: "کاهویی", name_en: "Lettuce Green", hex: "#9DC183" },
    Color { name: "دودی", name_en: "Smoke", hex: "#738276" },
    Color { name: "سربی", name_en: "Lead", hex: "#5F5F6E" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_non_trivial() {
        assert!(COLORS.len() >= 40);
    }

    #[test]
    fn test_hex_codes_are_well_formed() {
        for color in COLORS {
            assert_eq!(color.hex.len(), 7, "{}", color.name_en);
            assert!(color.hex.starts_with('#'));
            assert!(color.hex[1..].bytes().all(|b| b.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, color) in COLORS.iter().enumerate() {
            assert!(
                !COLORS[i + 1..].iter().any(|c| c.name == color.name),
                "duplicate color {}",
                color.name
            );
        }
    }
}
