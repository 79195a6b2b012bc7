pub mod cart;
pub mod category;
pub mod customization;
pub mod product;
pub mod user;

use crate::store::Storage;

use category::NewCategory;
use customization::NewCustomizationType;
use product::NewProduct;

/// Loads the fixed catalog into the store: customization types first,
/// then categories, then the products referencing both. Runs once at
/// startup; catalog entities have no update path afterwards.
pub fn seed(store: &dyn Storage) {
    let engraving = store.create_customization_type(NewCustomizationType {
        name: "engraving".to_string(),
        display_name: "Engraving".to_string(),
        color_hex: "#93c5fd".to_string(),
    });

    let color_options = store.create_customization_type(NewCustomizationType {
        name: "color_options".to_string(),
        display_name: "Color Options".to_string(),
        color_hex: "#bbf7d0".to_string(),
    });

    let custom_size = store.create_customization_type(NewCustomizationType {
        name: "custom_size".to_string(),
        display_name: "Custom Size".to_string(),
        color_hex: "#d8b4fe".to_string(),
    });

    let custom_config = store.create_customization_type(NewCustomizationType {
        name: "custom_config".to_string(),
        display_name: "Custom Config".to_string(),
        color_hex: "#fde68a".to_string(),
    });

    let monogram = store.create_customization_type(NewCustomizationType {
        name: "monogram".to_string(),
        display_name: "Monogram".to_string(),
        color_hex: "#93c5fd".to_string(),
    });

    let leather = store.create_category(NewCategory {
        name: "Leather Goods".to_string(),
        description: "Wallets, belts, bags & more".to_string(),
        image: "https://images.unsplash.com/photo-1605020420620-20c943cc4669?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80".to_string(),
        product_count: 42,
    });

    let ceramics = store.create_category(NewCategory {
        name: "Ceramics".to_string(),
        description: "Mugs, plates, decor & art".to_string(),
        image: "https://images.unsplash.com/photo-1528283648649-33347faa5d3e?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80".to_string(),
        product_count: 38,
    });

    let woodcraft = store.create_category(NewCategory {
        name: "Woodcraft".to_string(),
        description: "Furniture, gifts & decor".to_string(),
        image: "https://images.unsplash.com/photo-1610701596007-11502861dcfa?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80".to_string(),
        product_count: 51,
    });

    let textiles = store.create_category(NewCategory {
        name: "Textiles".to_string(),
        description: "Accessories, decor & apparel".to_string(),
        image: "https://images.unsplash.com/photo-1544457070-4cd773b4d71e?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80".to_string(),
        product_count: 29,
    });

    store.create_product(NewProduct {
        name: "Leather Journal".to_string(),
        description: "Our handcrafted leather journal is made from premium full-grain leather that develops a beautiful patina over time. Each journal is carefully assembled by skilled artisans with decades of experience. The journal features 192 pages of acid-free paper that works well with a variety of writing instruments. The binding allows the journal to lay flat when open, making writing comfortable and convenient.".to_string(),
        short_description: "Customizable cover & pages".to_string(),
        price: 79.99,
        category_id: leather.id,
        rating: 4.9,
        image: "https://images.unsplash.com/photo-1602028915047-37269d1a73f7?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1602028915047-37269d1a73f7?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
            "https://images.unsplash.com/photo-1590333748338-d629e4564ad9?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
            "https://images.unsplash.com/photo-1544239605-4c4cc25aa55a?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
            "https://images.unsplash.com/photo-1544377570-7b7fed7d408e?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        is_bestseller: true,
        is_new: false,
        customization_options: vec![engraving.id, custom_size.id],
        features: vec![
            "Full-grain leather cover".to_string(),
            "Refillable design".to_string(),
            "192 acid-free pages (96 sheets)".to_string(),
            "Lay-flat binding".to_string(),
            "Inner pocket for loose papers".to_string(),
            "Elastic closure".to_string(),
        ],
    });

    store.create_product(NewProduct {
        name: "Ceramic Mug Set".to_string(),
        description: "Handcrafted ceramic mugs perfect for your morning coffee or tea. Each mug is carefully made and glazed by our skilled artisans.".to_string(),
        short_description: "Set of 4, multiple glazes".to_string(),
        price: 119.99,
        category_id: ceramics.id,
        rating: 4.7,
        image: "https://images.unsplash.com/photo-1556760467-2a8243a7387f?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1556760467-2a8243a7387f?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        is_bestseller: false,
        is_new: false,
        customization_options: vec![color_options.id, monogram.id],
        features: vec![
            "Handcrafted ceramic".to_string(),
            "Microwave and dishwasher safe".to_string(),
            "12oz capacity".to_string(),
            "Multiple glaze options".to_string(),
            "Non-toxic materials".to_string(),
        ],
    });

    store.create_product(NewProduct {
        name: "Wooden Desk Organizer".to_string(),
        description: "Keep your workspace tidy with this handcrafted wooden desk organizer. Features multiple compartments for all your office essentials.".to_string(),
        short_description: "Modular design, oak finish".to_string(),
        price: 149.99,
        category_id: woodcraft.id,
        rating: 4.8,
        image: "https://images.unsplash.com/photo-1584917865442-de89df76afd3?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1584917865442-de89df76afd3?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        is_bestseller: false,
        is_new: true,
        customization_options: vec![custom_config.id, engraving.id],
        features: vec![
            "Solid oak construction".to_string(),
            "Multiple compartments".to_string(),
            "Modular design".to_string(),
            "Felt-lined drawers".to_string(),
            "Customizable layout".to_string(),
        ],
    });

    store.create_product(NewProduct {
        name: "Textile Wall Hanging".to_string(),
        description: "Add texture and warmth to your space with this handwoven wall hanging. Made from natural fibers with a unique design.".to_string(),
        short_description: "Handwoven, natural fibers".to_string(),
        price: 199.99,
        category_id: textiles.id,
        rating: 4.6,
        image: "https://images.unsplash.com/photo-1622560480654-d96214fdc887?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1622560480654-d96214fdc887?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        is_bestseller: false,
        is_new: false,
        customization_options: vec![color_options.id, custom_size.id],
        features: vec![
            "Handwoven design".to_string(),
            "Natural fibers".to_string(),
            "Wooden dowel included".to_string(),
            "Multiple size options".to_string(),
            "Customizable colors".to_string(),
        ],
    });

    store.create_product(NewProduct {
        name: "Glass Pendant Light".to_string(),
        description: "Illuminate your space with our handblown glass pendant lights. Each piece is unique with subtle variations in color and form.".to_string(),
        short_description: "Blown glass, multiple shapes".to_string(),
        price: 249.99,
        category_id: ceramics.id,
        rating: 4.9,
        image: "https://images.unsplash.com/photo-1600857544200-b2f666a9a2fc?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1600857544200-b2f666a9a2fc?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        is_bestseller: false,
        is_new: false,
        customization_options: vec![color_options.id, custom_config.id],
        features: vec![
            "Handblown glass".to_string(),
            "E26 standard socket".to_string(),
            "Adjustable cord length".to_string(),
            "Multiple color options".to_string(),
            "Custom shape options".to_string(),
        ],
    });

    store.create_product(NewProduct {
        name: "Metal Card Holder".to_string(),
        description: "Keep your business cards organized and accessible with this sleek metal card holder. Available in brushed steel or brass finish.".to_string(),
        short_description: "Brushed steel, brass options".to_string(),
        price: 69.99,
        category_id: leather.id,
        rating: 4.7,
        image: "https://images.unsplash.com/photo-1584811644165-33db2e427a08?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1584811644165-33db2e427a08?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        is_bestseller: true,
        is_new: false,
        customization_options: vec![engraving.id, color_options.id],
        features: vec![
            "Solid metal construction".to_string(),
            "Holds up to 20 business cards".to_string(),
            "Multiple finish options".to_string(),
            "Non-slip base".to_string(),
            "Optional engraving".to_string(),
        ],
    });

    store.create_product(NewProduct {
        name: "Leather Portfolio".to_string(),
        description: "Carry your documents in style with this premium leather portfolio. Features multiple pockets and a notepad holder.".to_string(),
        short_description: "Full-grain leather, A4 size".to_string(),
        price: 179.99,
        category_id: leather.id,
        rating: 4.8,
        image: "https://images.unsplash.com/photo-1584589167171-541ce45f1eea?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1584589167171-541ce45f1eea?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        is_bestseller: false,
        is_new: false,
        customization_options: vec![color_options.id, monogram.id],
        features: vec![
            "Full-grain leather".to_string(),
            "A4 size capacity".to_string(),
            "Multiple document pockets".to_string(),
            "Pen holder".to_string(),
            "Included notepad".to_string(),
            "Optional monogramming".to_string(),
        ],
    });

    store.create_product(NewProduct {
        name: "Wooden Desk Nameplate".to_string(),
        description: "Add a touch of personalization to your desk with this handcrafted wooden nameplate. Available in walnut, oak, or maple.".to_string(),
        short_description: "Walnut, oak, or maple".to_string(),
        price: 59.99,
        category_id: woodcraft.id,
        rating: 4.6,
        image: "https://images.unsplash.com/photo-1531661339613-3aa1c7fb1fdc?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1531661339613-3aa1c7fb1fdc?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        is_bestseller: false,
        is_new: true,
        customization_options: vec![engraving.id, color_options.id],
        features: vec![
            "Solid hardwood construction".to_string(),
            "Choice of wood types".to_string(),
            "Precision engraving".to_string(),
            "Desk or wall mount options".to_string(),
            "Natural oil finish".to_string(),
        ],
    });
}
