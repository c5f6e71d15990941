use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::sql_types::Int4;
use diesel::upsert::excluded;

use crate::db::DbPool;
use crate::domain::catalog::{
    Category, Coupon, Offer, PriceSort, Product, ProductFilter, ProductRecommendation, Review,
    Seller,
};
use crate::domain::customer::{
    combined_quantity, CartProduct, Customer, PaymentMethod, SearchHistory, ShoppingCart,
};
use crate::domain::entity::Stored;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderFilter, OrderItem, ProductReturn, Shipping};
use crate::domain::order_summary::OrderSummaryRow;
use crate::domain::ports::{
    CartRepository, CatalogQueries, CrudRepository, CustomerQueries, OrderQueries,
    OrderSummarySource,
};
use crate::schema::{
    categories, coupons, customers, offers, order_items, orders, payment_methods,
    product_recommendations, products, returns, reviews, search_history, sellers, shipping,
    shopping_cart_products, shopping_carts,
};

use super::models::*;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        use diesel::result::Error;

        match e {
            Error::NotFound => DomainError::NotFound,
            Error::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => DomainError::Conflict(message),
                    DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::CheckViolation
                    | DatabaseErrorKind::NotNullViolation => DomainError::InvalidInput(message),
                    DatabaseErrorKind::UnableToSendCommand
                    | DatabaseErrorKind::ClosedConnection
                    | DatabaseErrorKind::SerializationFailure => DomainError::Unavailable(message),
                    _ => DomainError::Internal(message),
                }
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        log::error!("Database pool unavailable: {e}");
        DomainError::Unavailable(e.to_string())
    }
}

/// Escapes `LIKE` metacharacters and wraps `fragment` for a substring match.
pub(crate) fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ── Repository ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

macro_rules! diesel_crud {
    ($entity:ty, $table:ident, $row:ty, $changes:ty) => {
        impl CrudRepository<$entity> for DieselRepository {
            fn create(&self, data: $entity) -> Result<i32, DomainError> {
                let mut conn = self.pool.get()?;
                let id = diesel::insert_into($table::table)
                    .values(<$changes>::from(data))
                    .returning($table::id)
                    .get_result::<i32>(&mut conn)?;
                Ok(id)
            }

            fn find_by_id(&self, id: i32) -> Result<Option<Stored<$entity>>, DomainError> {
                let mut conn = self.pool.get()?;
                let row = $table::table
                    .find(id)
                    .select(<$row>::as_select())
                    .first(&mut conn)
                    .optional()?;
                Ok(row.map(Stored::from))
            }

            fn find_all(&self) -> Result<Vec<Stored<$entity>>, DomainError> {
                let mut conn = self.pool.get()?;
                let rows = $table::table
                    .select(<$row>::as_select())
                    .order($table::id.asc())
                    .load(&mut conn)?;
                Ok(rows.into_iter().map(Stored::from).collect())
            }

            fn update(&self, id: i32, data: $entity) -> Result<(), DomainError> {
                let mut conn = self.pool.get()?;
                let affected = diesel::update($table::table.find(id))
                    .set(<$changes>::from(data))
                    .execute(&mut conn)?;
                if affected == 0 {
                    return Err(DomainError::NotFound);
                }
                Ok(())
            }

            fn delete(&self, id: i32) -> Result<(), DomainError> {
                let mut conn = self.pool.get()?;
                let affected = diesel::delete($table::table.find(id)).execute(&mut conn)?;
                if affected == 0 {
                    return Err(DomainError::NotFound);
                }
                Ok(())
            }
        }
    };
}

diesel_crud!(Customer, customers, CustomerRow, CustomerChanges);
diesel_crud!(Category, categories, CategoryRow, CategoryChanges);
diesel_crud!(Seller, sellers, SellerRow, SellerChanges);
diesel_crud!(PaymentMethod, payment_methods, PaymentMethodRow, PaymentMethodChanges);
diesel_crud!(Shipping, shipping, ShippingRow, ShippingChanges);
diesel_crud!(Offer, offers, OfferRow, OfferChanges);
diesel_crud!(Product, products, ProductRow, ProductChanges);
diesel_crud!(Coupon, coupons, CouponRow, CouponChanges);
diesel_crud!(Order, orders, OrderRow, OrderChanges);
diesel_crud!(OrderItem, order_items, OrderItemRow, OrderItemChanges);
diesel_crud!(Review, reviews, ReviewRow, ReviewChanges);
diesel_crud!(
    ProductRecommendation,
    product_recommendations,
    ProductRecommendationRow,
    ProductRecommendationChanges
);
diesel_crud!(ProductReturn, returns, ProductReturnRow, ProductReturnChanges);
diesel_crud!(SearchHistory, search_history, SearchHistoryRow, SearchHistoryChanges);
diesel_crud!(ShoppingCart, shopping_carts, ShoppingCartRow, ShoppingCartChanges);

// ── Order summary rows ───────────────────────────────────────────────────────

const ORDER_SUMMARY_SELECT: &str = "
    SELECT o.id AS order_id,
           o.total_amount,
           o.order_status,
           o.customer_id,
           o.payment_method_id,
           o.shipping_id,
           oi.product_id,
           p.product_name,
           oi.quantity,
           oi.price_at_purchase AS unit_price,
           COALESCE(c.discount_value, 0) AS coupon_discount,
           COALESCE(f.discount, 0) AS offer_discount
    FROM orders o
    LEFT JOIN order_items oi ON oi.order_id = o.id
    LEFT JOIN products p ON p.id = oi.product_id
    LEFT JOIN coupons c ON c.id = oi.coupon_id
    LEFT JOIN offers f ON f.id = oi.offer_id";

impl DieselRepository {
    fn summary_rows(&self, filter: &str, key: i32) -> Result<Vec<OrderSummaryRow>, DomainError> {
        let mut conn = self.pool.get()?;
        let sql = format!("{ORDER_SUMMARY_SELECT} WHERE {filter} = $1 ORDER BY o.id, oi.id");
        let records = diesel::sql_query(sql)
            .bind::<Int4, _>(key)
            .load::<OrderSummaryRecord>(&mut conn)?;
        Ok(records.into_iter().map(OrderSummaryRow::from).collect())
    }
}

impl OrderSummarySource for DieselRepository {
    fn order_rows(&self, order_id: i32) -> Result<Vec<OrderSummaryRow>, DomainError> {
        self.summary_rows("o.id", order_id)
    }

    fn customer_order_rows(&self, customer_id: i32) -> Result<Vec<OrderSummaryRow>, DomainError> {
        self.summary_rows("o.customer_id", customer_id)
    }
}

// ── Filtered lookups ─────────────────────────────────────────────────────────

impl CustomerQueries for DieselRepository {
    fn customer_by_email(&self, email: &str) -> Result<Option<Stored<Customer>>, DomainError> {
        let mut conn = self.pool.get()?;
        let row = customers::table
            .filter(customers::email.eq(email))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Stored::from))
    }

    fn customers_by_name(&self, fragment: &str) -> Result<Vec<Stored<Customer>>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = customers::table
            .filter(customers::full_name.ilike(like_pattern(fragment)))
            .select(CustomerRow::as_select())
            .order(customers::id.asc())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }

    fn payment_methods_of(
        &self,
        customer_id: i32,
    ) -> Result<Vec<Stored<PaymentMethod>>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = payment_methods::table
            .filter(payment_methods::customer_id.eq(customer_id))
            .select(PaymentMethodRow::as_select())
            .order(payment_methods::id.asc())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }
}

impl CatalogQueries for DieselRepository {
    fn categories_by_name(&self, fragment: &str) -> Result<Vec<Stored<Category>>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = categories::table
            .filter(categories::category_name.ilike(like_pattern(fragment)))
            .select(CategoryRow::as_select())
            .order(categories::id.asc())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }

    fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Stored<Product>>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = products::table
            .select(ProductRow::as_select())
            .into_boxed();
        if let Some(name) = &filter.name {
            query = query.filter(products::product_name.ilike(like_pattern(name)));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(products::category_id.eq(category_id));
        }
        if let Some(min_price) = &filter.min_price {
            query = query.filter(products::price.ge(min_price.clone()));
        }
        if let Some(max_price) = &filter.max_price {
            query = query.filter(products::price.le(max_price.clone()));
        }
        query = match filter.sort {
            PriceSort::Id => query.order(products::id.asc()),
            PriceSort::PriceAsc => query.order((products::price.asc(), products::id.asc())),
            PriceSort::PriceDesc => query.order((products::price.desc(), products::id.asc())),
        };

        let rows = query.load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }

    fn coupon_by_code(&self, code: &str) -> Result<Option<Stored<Coupon>>, DomainError> {
        let mut conn = self.pool.get()?;
        let row = coupons::table
            .filter(coupons::discount_code.eq(code))
            .select(CouponRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Stored::from))
    }

    fn sellers_by_name(&self, fragment: &str) -> Result<Vec<Stored<Seller>>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = sellers::table
            .filter(sellers::seller_name.ilike(like_pattern(fragment)))
            .select(SellerRow::as_select())
            .order(sellers::id.asc())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }

    fn sellers_rated_at_least(
        &self,
        min_rating: &BigDecimal,
    ) -> Result<Vec<Stored<Seller>>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = sellers::table
            .filter(sellers::seller_rating.ge(min_rating.clone()))
            .select(SellerRow::as_select())
            .order((sellers::seller_rating.desc(), sellers::id.asc()))
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }

    fn reviews_of_product(
        &self,
        product_id: i32,
        min_rating: Option<i32>,
    ) -> Result<Vec<Stored<Review>>, DomainError> {
        let mut conn = self.pool.get()?;
        let mut query = reviews::table
            .filter(reviews::product_id.eq(product_id))
            .select(ReviewRow::as_select())
            .order(reviews::id.asc())
            .into_boxed();
        if let Some(min_rating) = min_rating {
            query = query.filter(reviews::rating.ge(min_rating));
        }
        let rows = query.load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }
}

impl OrderQueries for DieselRepository {
    fn search_orders(&self, filter: &OrderFilter) -> Result<Vec<Stored<Order>>, DomainError> {
        let mut conn = self.pool.get()?;
        let mut query = orders::table
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .into_boxed();
        if let Some(status) = &filter.status {
            query = query.filter(orders::order_status.eq(status.clone()));
        }
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(orders::customer_id.eq(customer_id));
        }
        let rows = query.load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }

    fn returns_by_status(&self, status: &str) -> Result<Vec<Stored<ProductReturn>>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = returns::table
            .filter(returns::return_status.eq(status))
            .select(ProductReturnRow::as_select())
            .order(returns::id.asc())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }
}

// ── Shopping cart contents ───────────────────────────────────────────────────

impl CartRepository for DieselRepository {
    fn add_product(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartProduct, DomainError> {
        use crate::schema::shopping_cart_products::dsl;

        let mut conn = self.pool.get()?;
        let row = conn.transaction::<_, DomainError, _>(|conn| {
            let current = shopping_cart_products::table
                .find((cart_id, product_id))
                .select(dsl::quantity)
                .for_update()
                .first::<i32>(conn)
                .optional()?;
            if let Some(current) = current {
                combined_quantity(current, quantity)?;
            }
            let row = diesel::insert_into(shopping_cart_products::table)
                .values(CartProductRow {
                    cart_id,
                    product_id,
                    quantity,
                })
                .on_conflict((dsl::cart_id, dsl::product_id))
                .do_update()
                .set(dsl::quantity.eq(dsl::quantity + excluded(dsl::quantity)))
                .returning(CartProductRow::as_returning())
                .get_result(conn)?;
            Ok(row)
        })?;
        Ok(row.into())
    }

    fn cart_products(&self, cart_id: i32) -> Result<Vec<CartProduct>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = shopping_cart_products::table
            .filter(shopping_cart_products::cart_id.eq(cart_id))
            .select(CartProductRow::as_select())
            .order(shopping_cart_products::product_id.asc())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(CartProduct::from).collect())
    }

    fn set_quantity(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        let affected = diesel::update(shopping_cart_products::table.find((cart_id, product_id)))
            .set(shopping_cart_products::quantity.eq(quantity))
            .execute(&mut conn)?;
        if affected == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn remove_product(&self, cart_id: i32, product_id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        let affected = diesel::delete(shopping_cart_products::table.find((cart_id, product_id)))
            .execute(&mut conn)?;
        if affected == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn clear_cart(&self, cart_id: i32) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;
        let removed = diesel::delete(
            shopping_cart_products::table.filter(shopping_cart_products::cart_id.eq(cart_id)),
        )
        .execute(&mut conn)?;
        Ok(removed)
    }
}
