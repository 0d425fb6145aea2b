//! Catalog Seeding
//!
//! Populates the `product` table with the starter catalog. Re-running is a
//! no-op when the catalog already has products, so the seed can be invoked
//! freely against an existing database.

use crate::db::models::ProductCreate;
use crate::db::repository::ProductRepository;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

fn item(
    name: &str,
    price: f64,
    description: &str,
    stock: i64,
    featured: bool,
    image: &str,
) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        price,
        description: Some(description.to_string()),
        stock,
        featured: Some(featured),
        image: Some(image.to_string()),
        created_by: Some("seed".to_string()),
    }
}

/// The starter catalog
fn starter_catalog() -> Vec<ProductCreate> {
    vec![
        item(
            "Gaming Laptop",
            1299.99,
            "High-performance laptop with NVIDIA RTX graphics card.",
            20,
            true,
            "rog_strix.png",
        ),
        item(
            "Wireless Mouse",
            24.99,
            "Ergonomic wireless mouse with adjustable DPI.",
            50,
            false,
            "wireless-mouse.jpg",
        ),
        item(
            "Mechanical Keyboard",
            89.99,
            "RGB mechanical keyboard with customizable switches.",
            30,
            false,
            "mechanical-keyboard.jpg",
        ),
        item(
            "4K Monitor",
            399.99,
            "27-inch UHD monitor with HDR support.",
            15,
            true,
            "uhd_monitor.png",
        ),
        item(
            "External SSD",
            119.99,
            "1TB portable SSD with USB 3.1.",
            40,
            true,
            "hard-drive.jpeg",
        ),
        item(
            "Gaming Chair",
            199.99,
            "Ergonomic gaming chair with adjustable armrests.",
            10,
            false,
            "gaming-chair.jpg",
        ),
        item(
            "Webcam",
            49.99,
            "Full HD 1080p webcam for video conferencing.",
            35,
            false,
            "webcam.jpg",
        ),
        item(
            "Graphics Card",
            699.99,
            "NVIDIA RTX 3080 graphics card with 10GB VRAM.",
            5,
            false,
            "graphics-card.jpg",
        ),
        item(
            "Processor",
            329.99,
            "Intel Core i7 11th Gen Processor with 8 cores.",
            25,
            false,
            "processor.jpg",
        ),
        item(
            "Gaming Headset",
            79.99,
            "Surround sound headset with noise-canceling mic.",
            50,
            false,
            "gaming-headset.jpg",
        ),
        item(
            "Motherboard",
            199.99,
            "ATX motherboard with Wi-Fi 6 support.",
            12,
            false,
            "motherboard.jpg",
        ),
        item(
            "Power Supply Unit",
            89.99,
            "750W 80 Plus Gold certified PSU.",
            30,
            false,
            "psu.jpg",
        ),
        item(
            "Gaming Desk",
            159.99,
            "Spacious gaming desk with cable management.",
            8,
            false,
            "gaming-desk.jpg",
        ),
        item(
            "PC Case",
            119.99,
            "Mid-tower case with tempered glass panel.",
            20,
            false,
            "pc-case.jpg",
        ),
        item(
            "Router",
            99.99,
            "Wi-Fi 6 router with high-speed connectivity.",
            45,
            false,
            "router.jpg",
        ),
        item(
            "RAM",
            69.99,
            "16GB DDR4 RAM with RGB lighting.",
            40,
            false,
            "ram.jpg",
        ),
        item(
            "Cooling Fan",
            24.99,
            "RGB cooling fan for PC builds.",
            60,
            false,
            "cooling-fan.jpg",
        ),
        item(
            "Docking Station",
            79.99,
            "USB-C docking station with multiple ports.",
            25,
            false,
            "docking-station.jpg",
        ),
        item(
            "Soundbar",
            129.99,
            "Bluetooth soundbar with rich bass.",
            18,
            false,
            "soundbar.jpg",
        ),
        item(
            "Printer",
            199.99,
            "Wireless all-in-one printer with high-speed printing.",
            15,
            false,
            "printer.jpg",
        ),
        item(
            "USB-C Hub",
            39.99,
            "7-in-1 USB-C hub with HDMI, USB 3.0, and SD card reader.",
            40,
            false,
            "usb-c-hub.jpg",
        ),
        item(
            "Ethernet Cable",
            12.99,
            "Cat 6 Ethernet cable for high-speed internet connectivity.",
            100,
            false,
            "ethernet-cable.jpg",
        ),
        item(
            "Hard Drive",
            89.99,
            "2TB external hard drive for backup and storage.",
            50,
            false,
            "hard-drive.jpg",
        ),
        item(
            "Gaming Controller",
            59.99,
            "Wireless gaming controller with haptic feedback.",
            35,
            true,
            "ps5-pad.png",
        ),
        item(
            "Webcam Cover",
            9.99,
            "Privacy webcam cover for laptops and desktops.",
            150,
            false,
            "webcam-cover.jpg",
        ),
    ]
}

/// Seed the starter catalog, skipping when products already exist
///
/// Returns the number of products inserted (0 on a re-run).
pub async fn seed_catalog(db: Surreal<Db>) -> Result<usize, AppError> {
    let repo = ProductRepository::new(db);

    let existing = repo.count(None).await?;
    if existing > 0 {
        tracing::info!(existing, "Catalog already seeded, skipping");
        return Ok(0);
    }

    let catalog = starter_catalog();
    let total = catalog.len();
    for product in catalog {
        repo.create(product).await?;
    }

    tracing::info!(inserted = total, "Catalog seeded");
    Ok(total)
}
