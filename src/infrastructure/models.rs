use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{Int4, Nullable, Numeric, Text};

use crate::domain::catalog::{
    Category, Coupon, Offer, Product, ProductRecommendation, Review, Seller,
};
use crate::domain::customer::{CartProduct, Customer, PaymentMethod, SearchHistory, ShoppingCart};
use crate::domain::entity::Stored;
use crate::domain::order::{Order, OrderItem, ProductReturn, Shipping};
use crate::domain::order_summary::OrderSummaryRow;
use crate::schema::{
    categories, coupons, customers, offers, order_items, orders, payment_methods,
    product_recommendations, products, returns, reviews, search_history, sellers, shipping,
    shopping_cart_products, shopping_carts,
};

// ── Customers ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    pub phone: String,
    pub registration_date: NaiveDate,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = customers)]
pub struct CustomerChanges {
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    pub phone: String,
    pub registration_date: NaiveDate,
}

impl From<CustomerRow> for Stored<Customer> {
    fn from(r: CustomerRow) -> Self {
        Stored::new(
            r.id,
            Customer {
                full_name: r.full_name,
                email: r.email,
                shipping_address: r.shipping_address,
                phone: r.phone,
                registration_date: r.registration_date,
            },
        )
    }
}

impl From<Customer> for CustomerChanges {
    fn from(c: Customer) -> Self {
        Self {
            full_name: c.full_name,
            email: c.email,
            shipping_address: c.shipping_address,
            phone: c.phone,
            registration_date: c.registration_date,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = payment_methods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PaymentMethodRow {
    pub id: i32,
    pub payment_type: String,
    pub customer_id: Option<i32>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = payment_methods)]
#[diesel(treat_none_as_null = true)]
pub struct PaymentMethodChanges {
    pub payment_type: String,
    pub customer_id: Option<i32>,
}

impl From<PaymentMethodRow> for Stored<PaymentMethod> {
    fn from(r: PaymentMethodRow) -> Self {
        Stored::new(
            r.id,
            PaymentMethod {
                payment_type: r.payment_type,
                customer_id: r.customer_id,
            },
        )
    }
}

impl From<PaymentMethod> for PaymentMethodChanges {
    fn from(p: PaymentMethod) -> Self {
        Self {
            payment_type: p.payment_type,
            customer_id: p.customer_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = search_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SearchHistoryRow {
    pub id: i32,
    pub search_term: String,
    pub search_date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = search_history)]
pub struct SearchHistoryChanges {
    pub search_term: String,
    pub search_date: NaiveDate,
    pub customer_id: i32,
}

impl From<SearchHistoryRow> for Stored<SearchHistory> {
    fn from(r: SearchHistoryRow) -> Self {
        Stored::new(
            r.id,
            SearchHistory {
                search_term: r.search_term,
                search_date: r.search_date,
                customer_id: r.customer_id,
            },
        )
    }
}

impl From<SearchHistory> for SearchHistoryChanges {
    fn from(s: SearchHistory) -> Self {
        Self {
            search_term: s.search_term,
            search_date: s.search_date,
            customer_id: s.customer_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = shopping_carts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShoppingCartRow {
    pub id: i32,
    pub customer_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = shopping_carts)]
pub struct ShoppingCartChanges {
    pub customer_id: i32,
}

impl From<ShoppingCartRow> for Stored<ShoppingCart> {
    fn from(r: ShoppingCartRow) -> Self {
        Stored::new(
            r.id,
            ShoppingCart {
                customer_id: r.customer_id,
            },
        )
    }
}

impl From<ShoppingCart> for ShoppingCartChanges {
    fn from(c: ShoppingCart) -> Self {
        Self {
            customer_id: c.customer_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = shopping_cart_products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartProductRow {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl From<CartProductRow> for CartProduct {
    fn from(r: CartProductRow) -> Self {
        CartProduct {
            cart_id: r.cart_id,
            product_id: r.product_id,
            quantity: r.quantity,
        }
    }
}

// ── Catalog ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    pub id: i32,
    pub category_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = categories)]
#[diesel(treat_none_as_null = true)]
pub struct CategoryChanges {
    pub category_name: String,
    pub description: Option<String>,
}

impl From<CategoryRow> for Stored<Category> {
    fn from(r: CategoryRow) -> Self {
        Stored::new(
            r.id,
            Category {
                category_name: r.category_name,
                description: r.description,
            },
        )
    }
}

impl From<Category> for CategoryChanges {
    fn from(c: Category) -> Self {
        Self {
            category_name: c.category_name,
            description: c.description,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = sellers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SellerRow {
    pub id: i32,
    pub seller_name: String,
    pub seller_type: Option<String>,
    pub seller_rating: Option<BigDecimal>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = sellers)]
#[diesel(treat_none_as_null = true)]
pub struct SellerChanges {
    pub seller_name: String,
    pub seller_type: Option<String>,
    pub seller_rating: Option<BigDecimal>,
}

impl From<SellerRow> for Stored<Seller> {
    fn from(r: SellerRow) -> Self {
        Stored::new(
            r.id,
            Seller {
                seller_name: r.seller_name,
                seller_type: r.seller_type,
                seller_rating: r.seller_rating,
            },
        )
    }
}

impl From<Seller> for SellerChanges {
    fn from(s: Seller) -> Self {
        Self {
            seller_name: s.seller_name,
            seller_type: s.seller_type,
            seller_rating: s.seller_rating,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i32,
    pub product_name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub quantity_available: i32,
    pub category_id: i32,
    pub seller_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChanges {
    pub product_name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub quantity_available: i32,
    pub category_id: i32,
    pub seller_id: i32,
}

impl From<ProductRow> for Stored<Product> {
    fn from(r: ProductRow) -> Self {
        Stored::new(
            r.id,
            Product {
                product_name: r.product_name,
                description: r.description,
                price: r.price,
                quantity_available: r.quantity_available,
                category_id: r.category_id,
                seller_id: r.seller_id,
            },
        )
    }
}

impl From<Product> for ProductChanges {
    fn from(p: Product) -> Self {
        Self {
            product_name: p.product_name,
            description: p.description,
            price: p.price,
            quantity_available: p.quantity_available,
            category_id: p.category_id,
            seller_id: p.seller_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = offers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OfferRow {
    pub id: i32,
    pub discount: BigDecimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = offers)]
pub struct OfferChanges {
    pub discount: BigDecimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<OfferRow> for Stored<Offer> {
    fn from(r: OfferRow) -> Self {
        Stored::new(
            r.id,
            Offer {
                discount: r.discount,
                start_date: r.start_date,
                end_date: r.end_date,
            },
        )
    }
}

impl From<Offer> for OfferChanges {
    fn from(o: Offer) -> Self {
        Self {
            discount: o.discount,
            start_date: o.start_date,
            end_date: o.end_date,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = coupons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CouponRow {
    pub id: i32,
    pub discount_code: String,
    pub discount_value: BigDecimal,
    pub expiration_date: NaiveDate,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = coupons)]
pub struct CouponChanges {
    pub discount_code: String,
    pub discount_value: BigDecimal,
    pub expiration_date: NaiveDate,
}

impl From<CouponRow> for Stored<Coupon> {
    fn from(r: CouponRow) -> Self {
        Stored::new(
            r.id,
            Coupon {
                discount_code: r.discount_code,
                discount_value: r.discount_value,
                expiration_date: r.expiration_date,
            },
        )
    }
}

impl From<Coupon> for CouponChanges {
    fn from(c: Coupon) -> Self {
        Self {
            discount_code: c.discount_code,
            discount_value: c.discount_value,
            expiration_date: c.expiration_date,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReviewRow {
    pub id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub review_date: NaiveDate,
    pub customer_id: i32,
    pub product_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = reviews)]
#[diesel(treat_none_as_null = true)]
pub struct ReviewChanges {
    pub rating: i32,
    pub comment: Option<String>,
    pub review_date: NaiveDate,
    pub customer_id: i32,
    pub product_id: i32,
}

impl From<ReviewRow> for Stored<Review> {
    fn from(r: ReviewRow) -> Self {
        Stored::new(
            r.id,
            Review {
                rating: r.rating,
                comment: r.comment,
                review_date: r.review_date,
                customer_id: r.customer_id,
                product_id: r.product_id,
            },
        )
    }
}

impl From<Review> for ReviewChanges {
    fn from(r: Review) -> Self {
        Self {
            rating: r.rating,
            comment: r.comment,
            review_date: r.review_date,
            customer_id: r.customer_id,
            product_id: r.product_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = product_recommendations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRecommendationRow {
    pub id: i32,
    pub customer_id: i32,
    pub recommended_product_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = product_recommendations)]
pub struct ProductRecommendationChanges {
    pub customer_id: i32,
    pub recommended_product_id: i32,
}

impl From<ProductRecommendationRow> for Stored<ProductRecommendation> {
    fn from(r: ProductRecommendationRow) -> Self {
        Stored::new(
            r.id,
            ProductRecommendation {
                customer_id: r.customer_id,
                recommended_product_id: r.recommended_product_id,
            },
        )
    }
}

impl From<ProductRecommendation> for ProductRecommendationChanges {
    fn from(r: ProductRecommendation) -> Self {
        Self {
            customer_id: r.customer_id,
            recommended_product_id: r.recommended_product_id,
        }
    }
}

// ── Orders ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub total_amount: BigDecimal,
    pub order_status: String,
    pub customer_id: i32,
    pub payment_method_id: i32,
    pub shipping_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderChanges {
    pub total_amount: BigDecimal,
    pub order_status: String,
    pub customer_id: i32,
    pub payment_method_id: i32,
    pub shipping_id: i32,
}

impl From<OrderRow> for Stored<Order> {
    fn from(r: OrderRow) -> Self {
        Stored::new(
            r.id,
            Order {
                total_amount: r.total_amount,
                order_status: r.order_status,
                customer_id: r.customer_id,
                payment_method_id: r.payment_method_id,
                shipping_id: r.shipping_id,
            },
        )
    }
}

impl From<Order> for OrderChanges {
    fn from(o: Order) -> Self {
        Self {
            total_amount: o.total_amount,
            order_status: o.order_status,
            customer_id: o.customer_id,
            payment_method_id: o.payment_method_id,
            shipping_id: o.shipping_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: BigDecimal,
    pub coupon_id: Option<i32>,
    pub offer_id: Option<i32>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = order_items)]
#[diesel(treat_none_as_null = true)]
pub struct OrderItemChanges {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: BigDecimal,
    pub coupon_id: Option<i32>,
    pub offer_id: Option<i32>,
}

impl From<OrderItemRow> for Stored<OrderItem> {
    fn from(r: OrderItemRow) -> Self {
        Stored::new(
            r.id,
            OrderItem {
                order_id: r.order_id,
                product_id: r.product_id,
                quantity: r.quantity,
                price_at_purchase: r.price_at_purchase,
                coupon_id: r.coupon_id,
                offer_id: r.offer_id,
            },
        )
    }
}

impl From<OrderItem> for OrderItemChanges {
    fn from(i: OrderItem) -> Self {
        Self {
            order_id: i.order_id,
            product_id: i.product_id,
            quantity: i.quantity,
            price_at_purchase: i.price_at_purchase,
            coupon_id: i.coupon_id,
            offer_id: i.offer_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = shipping)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShippingRow {
    pub id: i32,
    pub shipping_company: String,
    pub shipping_date: Option<NaiveDate>,
    pub estimated_delivery: Option<NaiveDate>,
    pub shipping_cost: Option<BigDecimal>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = shipping)]
#[diesel(treat_none_as_null = true)]
pub struct ShippingChanges {
    pub shipping_company: String,
    pub shipping_date: Option<NaiveDate>,
    pub estimated_delivery: Option<NaiveDate>,
    pub shipping_cost: Option<BigDecimal>,
}

impl From<ShippingRow> for Stored<Shipping> {
    fn from(r: ShippingRow) -> Self {
        Stored::new(
            r.id,
            Shipping {
                shipping_company: r.shipping_company,
                shipping_date: r.shipping_date,
                estimated_delivery: r.estimated_delivery,
                shipping_cost: r.shipping_cost,
            },
        )
    }
}

impl From<Shipping> for ShippingChanges {
    fn from(s: Shipping) -> Self {
        Self {
            shipping_company: s.shipping_company,
            shipping_date: s.shipping_date,
            estimated_delivery: s.estimated_delivery,
            shipping_cost: s.shipping_cost,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = returns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductReturnRow {
    pub id: i32,
    pub return_date: NaiveDate,
    pub return_reason: Option<String>,
    pub return_status: Option<String>,
    pub order_item_id: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = returns)]
#[diesel(treat_none_as_null = true)]
pub struct ProductReturnChanges {
    pub return_date: NaiveDate,
    pub return_reason: Option<String>,
    pub return_status: Option<String>,
    pub order_item_id: i32,
}

impl From<ProductReturnRow> for Stored<ProductReturn> {
    fn from(r: ProductReturnRow) -> Self {
        Stored::new(
            r.id,
            ProductReturn {
                return_date: r.return_date,
                return_reason: r.return_reason,
                return_status: r.return_status,
                order_item_id: r.order_item_id,
            },
        )
    }
}

impl From<ProductReturn> for ProductReturnChanges {
    fn from(r: ProductReturn) -> Self {
        Self {
            return_date: r.return_date,
            return_reason: r.return_reason,
            return_status: r.return_status,
            order_item_id: r.order_item_id,
        }
    }
}

/// Result row of the order summary join; column names match the aliases in
/// `ORDER_SUMMARY_SELECT`.
#[derive(Debug, QueryableByName)]
pub struct OrderSummaryRecord {
    #[diesel(sql_type = Int4)]
    pub order_id: i32,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub total_amount: Option<BigDecimal>,
    #[diesel(sql_type = Nullable<Text>)]
    pub order_status: Option<String>,
    #[diesel(sql_type = Nullable<Int4>)]
    pub customer_id: Option<i32>,
    #[diesel(sql_type = Nullable<Int4>)]
    pub payment_method_id: Option<i32>,
    #[diesel(sql_type = Nullable<Int4>)]
    pub shipping_id: Option<i32>,
    #[diesel(sql_type = Nullable<Int4>)]
    pub product_id: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub product_name: Option<String>,
    #[diesel(sql_type = Nullable<Int4>)]
    pub quantity: Option<i32>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub unit_price: Option<BigDecimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub coupon_discount: Option<BigDecimal>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub offer_discount: Option<BigDecimal>,
}

impl From<OrderSummaryRecord> for OrderSummaryRow {
    fn from(r: OrderSummaryRecord) -> Self {
        OrderSummaryRow {
            order_id: r.order_id,
            total_amount: r.total_amount,
            order_status: r.order_status,
            customer_id: r.customer_id,
            payment_method_id: r.payment_method_id,
            shipping_id: r.shipping_id,
            product_id: r.product_id,
            product_name: r.product_name,
            quantity: r.quantity,
            unit_price: r.unit_price,
            coupon_discount: r.coupon_discount,
            offer_discount: r.offer_discount,
        }
    }
}
