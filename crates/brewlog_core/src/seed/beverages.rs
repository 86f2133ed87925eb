//! Demo beverage table.

use crate::model::category::UNDEFINED_CATEGORY_NAME;

const MINERAL_WATER: &str = "Mineral Water";
const SOFT_DRINK: &str = "Soft Drink";
const COFFEE: &str = "Coffee";
const TEA: &str = "Tea";
const DAIRY: &str = "Dairy";
const CIDER: &str = "Cider";
const BEER: &str = "Beer";
const WINE: &str = "Wine";
const OTHER: &str = "Other";

/// Beverage name to category name, in table order.
///
/// The final entry maps the empty beverage name to the undefined category,
/// which makes the sentinel the last demo category.
pub const BEVERAGES: &[(&str, &str)] = &[
    ("Evian", MINERAL_WATER),
    ("Voss", MINERAL_WATER),
    ("Veen", MINERAL_WATER),
    ("San Pellegrino", MINERAL_WATER),
    ("Perrier", MINERAL_WATER),
    ("Coca-Cola", SOFT_DRINK),
    ("Fanta", SOFT_DRINK),
    ("Sprite", SOFT_DRINK),
    ("Maxwell Ready-to-Drink Coffee", COFFEE),
    ("Nescafé Gold", COFFEE),
    ("Starbucks East Timor Tatamailau", COFFEE),
    ("Prince Of Peace Organic White Tea", TEA),
    ("Pai Mu Tan White Peony Tea", TEA),
    ("Tazo Zen Green Tea", TEA),
    ("Dilmah Sencha Green Tea", TEA),
    ("Twinings Earl Grey", TEA),
    ("Twinings Lady Grey", TEA),
    ("Classic Indian Chai", TEA),
    ("Cow's Milk", DAIRY),
    ("Goat's Milk", DAIRY),
    ("Unicorn's Milk", DAIRY),
    ("Salt Lassi", DAIRY),
    ("Mango Lassi", DAIRY),
    ("Airag", DAIRY),
    ("Crowmoor Extra Dry Apple", CIDER),
    ("Golden Cap Perry", CIDER),
    ("Somersby Blueberry", CIDER),
    ("Kopparbergs Naked Apple Cider", CIDER),
    ("Kopparbergs Raspberry", CIDER),
    ("Kingstone Press Wild Berry Flavoured Cider", CIDER),
    ("Crumpton Oaks Apple", CIDER),
    ("Frosty Jack's", CIDER),
    ("Ciderboys Mad Bark", CIDER),
    ("Angry Orchard Stone Dry", CIDER),
    ("Walden Hollow", CIDER),
    ("Fox Barrel Wit Pear", CIDER),
    ("Budweiser", BEER),
    ("Miller", BEER),
    ("Heineken", BEER),
    ("Holsten Pilsener", BEER),
    ("Krombacher", BEER),
    ("Weihenstephaner Hefeweissbier", BEER),
    ("Ayinger Kellerbier", BEER),
    ("Guinness Draught", BEER),
    ("Kilkenny Irish Cream Ale", BEER),
    ("Hoegaarden White", BEER),
    ("Barbar", BEER),
    ("Corsendonk Agnus Dei", BEER),
    ("Leffe Blonde", BEER),
    ("Chimay Tripel", BEER),
    ("Duvel", BEER),
    ("Pilsner Urquell", BEER),
    ("Kozel", BEER),
    ("Staropramen", BEER),
    ("Lapin Kulta IVA", BEER),
    ("Kukko Pils III", BEER),
    ("Finlandia Sahti", BEER),
    ("Jacob's Creek Classic Shiraz", WINE),
    ("Chateau d’Yquem Sauternes", WINE),
    ("Oremus Tokaji Aszú 5 Puttonyos", WINE),
    ("Pan Galactic Gargle Blaster", OTHER),
    ("Mead", OTHER),
    ("Soma", OTHER),
    ("", UNDEFINED_CATEGORY_NAME),
];

/// Category names of [`BEVERAGES`], de-duplicated in first-seen order.
pub fn demo_category_names() -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (_, category) in BEVERAGES {
        if !names.iter().any(|name| name == category) {
            names.push((*category).to_string());
        }
    }
    names
}
