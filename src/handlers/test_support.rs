//! In-memory storefront used by the handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use bigdecimal::BigDecimal;

use crate::domain::catalog::{
    Category, Coupon, Offer, PriceSort, Product, ProductFilter, ProductRecommendation, Review,
    Seller,
};
use crate::domain::customer::{
    combined_quantity, CartProduct, Customer, PaymentMethod, SearchHistory, ShoppingCart,
};
use crate::domain::entity::{Entity, Stored};
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderFilter, OrderItem, ProductReturn, Shipping};
use crate::domain::order_summary::OrderSummaryRow;
use crate::domain::ports::{
    CartRepository, CatalogQueries, CrudRepository, CustomerQueries, OrderQueries,
    OrderSummarySource,
};

pub struct Table<E> {
    rows: Mutex<BTreeMap<i32, E>>,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<E: Clone> Table<E> {
    fn snapshot(&self) -> Vec<Stored<E>> {
        let rows = self.rows.lock().unwrap();
        rows.iter().map(|(id, e)| Stored::new(*id, e.clone())).collect()
    }
}

pub trait HasTable<E> {
    fn table(&self) -> &Table<E>;
}

#[derive(Default)]
pub struct InMemoryStore {
    customers: Table<Customer>,
    categories: Table<Category>,
    sellers: Table<Seller>,
    payment_methods: Table<PaymentMethod>,
    shipping: Table<Shipping>,
    offers: Table<Offer>,
    products: Table<Product>,
    coupons: Table<Coupon>,
    orders: Table<Order>,
    order_items: Table<OrderItem>,
    reviews: Table<Review>,
    recommendations: Table<ProductRecommendation>,
    returns: Table<ProductReturn>,
    search_history: Table<SearchHistory>,
    carts: Table<ShoppingCart>,
    cart_products: Mutex<BTreeMap<(i32, i32), i32>>,
    summary_rows: Mutex<Vec<OrderSummaryRow>>,
    offline: bool,
}

macro_rules! has_table {
    ($($entity:ty => $field:ident),* $(,)?) => {
        $(
            impl HasTable<$entity> for InMemoryStore {
                fn table(&self) -> &Table<$entity> {
                    &self.$field
                }
            }
        )*
    };
}

has_table!(
    Customer => customers,
    Category => categories,
    Seller => sellers,
    PaymentMethod => payment_methods,
    Shipping => shipping,
    Offer => offers,
    Product => products,
    Coupon => coupons,
    Order => orders,
    OrderItem => order_items,
    Review => reviews,
    ProductRecommendation => recommendations,
    ProductReturn => returns,
    SearchHistory => search_history,
    ShoppingCart => carts,
);

impl InMemoryStore {
    /// A store whose every call fails as if the database were down.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_summary_rows(rows: Vec<OrderSummaryRow>) -> Self {
        Self {
            summary_rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    /// Seeds a record, bypassing validation.
    pub fn insert<E>(&self, data: E) -> i32
    where
        Self: HasTable<E>,
    {
        let mut rows = HasTable::<E>::table(self).rows.lock().unwrap();
        let id = rows.keys().next_back().map_or(1, |last| last + 1);
        rows.insert(id, data);
        id
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.offline {
            return Err(DomainError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

impl<E> CrudRepository<E> for InMemoryStore
where
    E: Entity,
    InMemoryStore: HasTable<E>,
{
    fn create(&self, data: E) -> Result<i32, DomainError> {
        self.check()?;
        Ok(self.insert(data))
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Stored<E>>, DomainError> {
        self.check()?;
        let rows = HasTable::<E>::table(self).rows.lock().unwrap();
        Ok(rows.get(&id).map(|e| Stored::new(id, e.clone())))
    }

    fn find_all(&self) -> Result<Vec<Stored<E>>, DomainError> {
        self.check()?;
        Ok(HasTable::<E>::table(self).snapshot())
    }

    fn update(&self, id: i32, data: E) -> Result<(), DomainError> {
        self.check()?;
        let mut rows = HasTable::<E>::table(self).rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(existing) => {
                *existing = data;
                Ok(())
            }
            None => Err(DomainError::NotFound),
        }
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.check()?;
        let mut rows = HasTable::<E>::table(self).rows.lock().unwrap();
        rows.remove(&id).map(|_| ()).ok_or(DomainError::NotFound)
    }
}

impl OrderSummarySource for InMemoryStore {
    fn order_rows(&self, order_id: i32) -> Result<Vec<OrderSummaryRow>, DomainError> {
        self.check()?;
        let rows = self.summary_rows.lock().unwrap();
        Ok(rows.iter().filter(|r| r.order_id == order_id).cloned().collect())
    }

    fn customer_order_rows(&self, customer_id: i32) -> Result<Vec<OrderSummaryRow>, DomainError> {
        self.check()?;
        let rows = self.summary_rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.customer_id == Some(customer_id))
            .cloned()
            .collect())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl CustomerQueries for InMemoryStore {
    fn customer_by_email(&self, email: &str) -> Result<Option<Stored<Customer>>, DomainError> {
        self.check()?;
        Ok(self
            .customers
            .snapshot()
            .into_iter()
            .find(|c| c.data.email == email))
    }

    fn customers_by_name(&self, fragment: &str) -> Result<Vec<Stored<Customer>>, DomainError> {
        self.check()?;
        let mut found = self.customers.snapshot();
        found.retain(|c| contains_ignore_case(&c.data.full_name, fragment));
        Ok(found)
    }

    fn payment_methods_of(
        &self,
        customer_id: i32,
    ) -> Result<Vec<Stored<PaymentMethod>>, DomainError> {
        self.check()?;
        let mut found = self.payment_methods.snapshot();
        found.retain(|p| p.data.customer_id == Some(customer_id));
        Ok(found)
    }
}

impl CatalogQueries for InMemoryStore {
    fn categories_by_name(&self, fragment: &str) -> Result<Vec<Stored<Category>>, DomainError> {
        self.check()?;
        let mut found = self.categories.snapshot();
        found.retain(|c| contains_ignore_case(&c.data.category_name, fragment));
        Ok(found)
    }

    fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Stored<Product>>, DomainError> {
        self.check()?;
        let mut found = self.products.snapshot();
        found.retain(|p| {
            filter
                .name
                .as_deref()
                .map_or(true, |n| contains_ignore_case(&p.data.product_name, n))
                && filter.category_id.map_or(true, |c| p.data.category_id == c)
                && filter.min_price.as_ref().map_or(true, |min| p.data.price >= *min)
                && filter.max_price.as_ref().map_or(true, |max| p.data.price <= *max)
        });
        match filter.sort {
            PriceSort::Id => {}
            PriceSort::PriceAsc => found.sort_by(|a, b| a.data.price.cmp(&b.data.price)),
            PriceSort::PriceDesc => found.sort_by(|a, b| b.data.price.cmp(&a.data.price)),
        }
        Ok(found)
    }

    fn coupon_by_code(&self, code: &str) -> Result<Option<Stored<Coupon>>, DomainError> {
        self.check()?;
        Ok(self
            .coupons
            .snapshot()
            .into_iter()
            .find(|c| c.data.discount_code == code))
    }

    fn sellers_by_name(&self, fragment: &str) -> Result<Vec<Stored<Seller>>, DomainError> {
        self.check()?;
        let mut found = self.sellers.snapshot();
        found.retain(|s| contains_ignore_case(&s.data.seller_name, fragment));
        Ok(found)
    }

    fn sellers_rated_at_least(
        &self,
        min_rating: &BigDecimal,
    ) -> Result<Vec<Stored<Seller>>, DomainError> {
        self.check()?;
        let mut found = self.sellers.snapshot();
        found.retain(|s| s.data.seller_rating.as_ref().is_some_and(|r| r >= min_rating));
        found.sort_by(|a, b| b.data.seller_rating.cmp(&a.data.seller_rating));
        Ok(found)
    }

    fn reviews_of_product(
        &self,
        product_id: i32,
        min_rating: Option<i32>,
    ) -> Result<Vec<Stored<Review>>, DomainError> {
        self.check()?;
        let mut found = self.reviews.snapshot();
        found.retain(|r| {
            r.data.product_id == product_id && min_rating.map_or(true, |min| r.data.rating >= min)
        });
        Ok(found)
    }
}

impl OrderQueries for InMemoryStore {
    fn search_orders(&self, filter: &OrderFilter) -> Result<Vec<Stored<Order>>, DomainError> {
        self.check()?;
        let mut found = self.orders.snapshot();
        found.retain(|o| {
            filter
                .status
                .as_deref()
                .map_or(true, |s| o.data.order_status == s)
                && filter.customer_id.map_or(true, |c| o.data.customer_id == c)
        });
        Ok(found)
    }

    fn returns_by_status(&self, status: &str) -> Result<Vec<Stored<ProductReturn>>, DomainError> {
        self.check()?;
        let mut found = self.returns.snapshot();
        found.retain(|r| r.data.return_status.as_deref() == Some(status));
        Ok(found)
    }
}

impl CartRepository for InMemoryStore {
    fn add_product(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartProduct, DomainError> {
        self.check()?;
        if !self.carts.rows.lock().unwrap().contains_key(&cart_id) {
            return Err(DomainError::InvalidInput(format!(
                "cart {cart_id} does not exist"
            )));
        }
        let mut lines = self.cart_products.lock().unwrap();
        let total = lines.entry((cart_id, product_id)).or_insert(0);
        *total = combined_quantity(*total, quantity)?;
        Ok(CartProduct {
            cart_id,
            product_id,
            quantity: *total,
        })
    }

    fn cart_products(&self, cart_id: i32) -> Result<Vec<CartProduct>, DomainError> {
        self.check()?;
        let lines = self.cart_products.lock().unwrap();
        Ok(lines
            .iter()
            .filter(|((cart, _), _)| *cart == cart_id)
            .map(|(&(cart_id, product_id), &quantity)| CartProduct {
                cart_id,
                product_id,
                quantity,
            })
            .collect())
    }

    fn set_quantity(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), DomainError> {
        self.check()?;
        let mut lines = self.cart_products.lock().unwrap();
        let line = lines
            .get_mut(&(cart_id, product_id))
            .ok_or(DomainError::NotFound)?;
        *line = quantity;
        Ok(())
    }

    fn remove_product(&self, cart_id: i32, product_id: i32) -> Result<(), DomainError> {
        self.check()?;
        let mut lines = self.cart_products.lock().unwrap();
        lines
            .remove(&(cart_id, product_id))
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }

    fn clear_cart(&self, cart_id: i32) -> Result<usize, DomainError> {
        self.check()?;
        let mut lines = self.cart_products.lock().unwrap();
        let before = lines.len();
        lines.retain(|(cart, _), _| *cart != cart_id);
        Ok(before - lines.len())
    }
}
