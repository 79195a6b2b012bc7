use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entities::cart::{Cart, CartItem, NewCart, NewCartItem};
use crate::entities::category::{Category, NewCategory};
use crate::entities::customization::{CustomizationType, NewCustomizationType};
use crate::entities::product::{NewProduct, Product};
use crate::entities::user::{NewUser, User};

/// Inclusive price bounds. A product passes when `price >= min` (if set)
/// and `price <= max` (if set).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Named sort strategies for product listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Popular,
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortKey {
    /// Parses the query-string form of a sort key. Unrecognized strings
    /// yield `None` and the caller leaves the collection unsorted.
    pub fn from_param(param: &str) -> Option<SortKey> {
        match param {
            "popular" => Some(SortKey::Popular),
            "newest" => Some(SortKey::Newest),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "rating" => Some(SortKey::Rating),
            _ => None,
        }
    }
}

/// Filter criteria for product listings. Every criterion is explicitly
/// optional: `None` (or an empty customization list) means "no
/// constraint", so a present `min_rating` of 0.0 is a real, if vacuous,
/// predicate rather than an unset one. Criteria combine with AND; the
/// customization list matches on non-empty intersection.
#[derive(Clone, Debug, Default)]
pub struct ProductFilters {
    pub category_id: Option<i32>,
    pub price_range: Option<PriceRange>,
    pub customization_types: Vec<i32>,
    pub search: Option<String>,
    pub min_rating: Option<f64>,
    pub sort: Option<SortKey>,
}

/// Storage seam for the entity collections. The in-memory implementation
/// is the only one today; a durable backend would substitute here without
/// touching the filter, sort or aggregation logic above it.
pub trait Storage: Send + Sync {
    fn get_categories(&self) -> Vec<Category>;
    fn get_category(&self, id: i32) -> Option<Category>;
    fn create_category(&self, category: NewCategory) -> Category;

    fn get_products(&self, filters: &ProductFilters) -> Vec<Product>;
    fn get_product(&self, id: i32) -> Option<Product>;
    fn get_featured_products(&self, limit: Option<i64>) -> Vec<Product>;
    fn create_product(&self, product: NewProduct) -> Product;

    fn get_customization_types(&self) -> Vec<CustomizationType>;
    fn create_customization_type(&self, kind: NewCustomizationType) -> CustomizationType;

    fn get_cart(&self, id: i32) -> Option<Cart>;
    fn get_cart_by_user(&self, user_id: i32) -> Option<Cart>;
    fn create_cart(&self, cart: NewCart) -> Cart;

    fn get_cart_items(&self, cart_id: i32) -> Vec<CartItem>;
    fn add_cart_item(&self, item: NewCartItem) -> CartItem;
    fn update_cart_item_quantity(&self, id: i32, quantity: u32) -> Option<CartItem>;
    fn remove_cart_item(&self, id: i32) -> bool;

    fn get_user(&self, id: i32) -> Option<User>;
    fn get_user_by_username(&self, username: &str) -> Option<User>;
    fn create_user(&self, user: NewUser) -> User;
}

pub type SharedStore = Arc<dyn Storage>;

#[derive(Default)]
struct StoreInner {
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
    customization_types: BTreeMap<i32, CustomizationType>,
    carts: BTreeMap<i32, Cart>,
    cart_items: BTreeMap<i32, CartItem>,
    users: BTreeMap<i32, User>,

    next_category_id: i32,
    next_product_id: i32,
    next_customization_type_id: i32,
    next_cart_id: i32,
    next_cart_item_id: i32,
    next_user_id: i32,
}

/// Transient in-memory store. Ids are assigned sequentially from 1 per
/// entity type, and the id-ordered maps make unfiltered listings come
/// back in insertion order. Not designed for concurrent-writer
/// correctness: simultaneous mutations of the same cart are
/// last-write-wins.
pub struct MemStorage {
    inner: RwLock<StoreInner>,
}

impl MemStorage {
    pub fn new() -> MemStorage {
        MemStorage {
            inner: RwLock::new(StoreInner {
                next_category_id: 1,
                next_product_id: 1,
                next_customization_type_id: 1,
                next_cart_id: 1,
                next_cart_item_id: 1,
                next_user_id: 1,
                ..StoreInner::default()
            }),
        }
    }

    // A poisoned lock only means a writer panicked mid-operation; the
    // maps are still usable, so recover the guard instead of propagating.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        MemStorage::new()
    }
}

fn matches_filters(product: &Product, filters: &ProductFilters) -> bool {
    if let Some(category_id) = filters.category_id {
        if product.category_id != category_id {
            return false;
        }
    }

    if let Some(range) = &filters.price_range {
        if let Some(min) = range.min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = range.max {
            if product.price > max {
                return false;
            }
        }
    }

    if !filters.customization_types.is_empty()
        && !filters
            .customization_types
            .iter()
            .any(|type_id| product.customization_options.contains(type_id))
    {
        return false;
    }

    if let Some(search) = &filters.search {
        let needle = search.to_lowercase();
        let hit = product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
            || product.short_description.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }

    if let Some(min_rating) = filters.min_rating {
        if product.rating < min_rating {
            return false;
        }
    }

    true
}

fn apply_sort(products: &mut [Product], sort: SortKey) {
    // Vec::sort_by is stable, so tie order stays deterministic.
    match sort {
        SortKey::Popular | SortKey::Rating => {
            products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        SortKey::Newest => {
            products.sort_by(|a, b| b.is_new.cmp(&a.is_new));
        }
        SortKey::PriceAsc => {
            products.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SortKey::PriceDesc => {
            products.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
    }
}

impl Storage for MemStorage {
    fn get_categories(&self) -> Vec<Category> {
        self.read().categories.values().cloned().collect()
    }

    fn get_category(&self, id: i32) -> Option<Category> {
        self.read().categories.get(&id).cloned()
    }

    fn create_category(&self, category: NewCategory) -> Category {
        let mut inner = self.write();
        let id = inner.next_category_id;
        inner.next_category_id += 1;
        let created = Category {
            id,
            name: category.name,
            description: category.description,
            image: category.image,
            product_count: category.product_count,
        };
        inner.categories.insert(id, created.clone());
        created
    }

    fn get_products(&self, filters: &ProductFilters) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .read()
            .products
            .values()
            .filter(|product| matches_filters(product, filters))
            .cloned()
            .collect();

        if let Some(sort) = filters.sort {
            apply_sort(&mut products, sort);
        }

        products
    }

    fn get_product(&self, id: i32) -> Option<Product> {
        self.read().products.get(&id).cloned()
    }

    fn get_featured_products(&self, limit: Option<i64>) -> Vec<Product> {
        let mut products: Vec<Product> = self.read().products.values().cloned().collect();

        // Bestsellers first, then new arrivals, then by rating.
        products.sort_by(|a, b| {
            b.is_bestseller
                .cmp(&a.is_bestseller)
                .then(b.is_new.cmp(&a.is_new))
                .then(b.rating.total_cmp(&a.rating))
        });

        if let Some(limit) = limit {
            if limit <= 0 {
                return Vec::new();
            }
            products.truncate(limit as usize);
        }

        products
    }

    fn create_product(&self, product: NewProduct) -> Product {
        let mut inner = self.write();
        let id = inner.next_product_id;
        inner.next_product_id += 1;
        let created = Product {
            id,
            name: product.name,
            description: product.description,
            short_description: product.short_description,
            price: product.price,
            category_id: product.category_id,
            rating: product.rating,
            image: product.image,
            images: product.images,
            is_bestseller: product.is_bestseller,
            is_new: product.is_new,
            customization_options: product.customization_options,
            features: product.features,
        };
        inner.products.insert(id, created.clone());
        created
    }

    fn get_customization_types(&self) -> Vec<CustomizationType> {
        self.read().customization_types.values().cloned().collect()
    }

    fn create_customization_type(&self, kind: NewCustomizationType) -> CustomizationType {
        let mut inner = self.write();
        let id = inner.next_customization_type_id;
        inner.next_customization_type_id += 1;
        let created = CustomizationType {
            id,
            name: kind.name,
            display_name: kind.display_name,
            color_hex: kind.color_hex,
        };
        inner.customization_types.insert(id, created.clone());
        created
    }

    fn get_cart(&self, id: i32) -> Option<Cart> {
        self.read().carts.get(&id).cloned()
    }

    fn get_cart_by_user(&self, user_id: i32) -> Option<Cart> {
        self.read()
            .carts
            .values()
            .find(|cart| cart.user_id == Some(user_id))
            .cloned()
    }

    fn create_cart(&self, cart: NewCart) -> Cart {
        let mut inner = self.write();
        let id = inner.next_cart_id;
        inner.next_cart_id += 1;
        let created = Cart {
            id,
            user_id: cart.user_id,
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        };
        inner.carts.insert(id, created.clone());
        created
    }

    fn get_cart_items(&self, cart_id: i32) -> Vec<CartItem> {
        self.read()
            .cart_items
            .values()
            .filter(|item| item.cart_id == cart_id)
            .cloned()
            .collect()
    }

    fn add_cart_item(&self, item: NewCartItem) -> CartItem {
        let mut inner = self.write();
        let id = inner.next_cart_item_id;
        inner.next_cart_item_id += 1;
        let created = CartItem {
            id,
            cart_id: item.cart_id,
            product_id: item.product_id,
            quantity: item.quantity,
            customizations: item.customizations,
        };
        inner.cart_items.insert(id, created.clone());
        created
    }

    fn update_cart_item_quantity(&self, id: i32, quantity: u32) -> Option<CartItem> {
        let mut inner = self.write();
        let item = inner.cart_items.get_mut(&id)?;
        item.quantity = quantity;
        Some(item.clone())
    }

    fn remove_cart_item(&self, id: i32) -> bool {
        self.write().cart_items.remove(&id).is_some()
    }

    fn get_user(&self, id: i32) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    fn create_user(&self, user: NewUser) -> User {
        let mut inner = self.write();
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let created = User {
            id,
            username: user.username,
            password: user.password,
            email: user.email,
            name: user.name,
        };
        inner.users.insert(id, created.clone());
        created
    }
}
