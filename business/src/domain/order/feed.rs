use std::collections::{HashSet, VecDeque};

use uuid::Uuid;

use super::model::Order;
use super::subscription::OrderSubscription;
use crate::domain::shared::value_objects::BusinessId;

/// Transient notice shown to the owner when a new order arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderNotification {
    pub order_id: Uuid,
    pub customer_name: String,
    pub message: String,
}

/// Most-recent-first list of one business's orders, keyed by order id.
#[derive(Debug, Clone)]
pub struct OrderFeed {
    business_id: BusinessId,
    orders: VecDeque<Order>,
    seen: HashSet<Uuid>,
}

impl OrderFeed {
    /// `history` is expected most recent first, as the repository returns it.
    pub fn new(business_id: BusinessId, history: Vec<Order>) -> Self {
        let mut seen = HashSet::with_capacity(history.len());
        let orders = history
            .into_iter()
            .filter(|order| order.business_id == business_id && seen.insert(order.id))
            .collect();

        Self {
            business_id,
            orders,
            seen,
        }
    }

    /// Prepends a delivered order. Returns `None` for orders of another
    /// business and for ids already displayed.
    pub fn receive(&mut self, order: Order) -> Option<OrderNotification> {
        if order.business_id != self.business_id || !self.seen.insert(order.id) {
            return None;
        }

        let notification = OrderNotification {
            order_id: order.id,
            customer_name: order.customer_name.clone(),
            message: format!("New order from {}", order.customer_name),
        };
        self.orders.push_front(order);
        Some(notification)
    }

    pub fn business_id(&self) -> &BusinessId {
        &self.business_id
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// An `OrderFeed` driven by a live subscription.
#[derive(Debug)]
pub struct LiveOrderFeed {
    feed: OrderFeed,
    subscription: OrderSubscription,
    dropped: u64,
}

impl LiveOrderFeed {
    pub fn new(feed: OrderFeed, subscription: OrderSubscription) -> Self {
        Self {
            feed,
            subscription,
            dropped: 0,
        }
    }

    /// Waits for the next order that is new to this feed. Deliveries are
    /// processed one at a time in arrival order; redeliveries are skipped.
    pub async fn next(&mut self) -> Option<(OrderNotification, Order)> {
        loop {
            let order = self.subscription.next().await?;
            match self.feed.receive(order.clone()) {
                Some(notification) => return Some((notification, order)),
                None => self.dropped += 1,
            }
        }
    }

    pub fn feed(&self) -> &OrderFeed {
        &self.feed
    }

    /// Deliveries skipped because they were duplicates or foreign.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Releases the underlying subscription.
    pub fn close(self) {
        self.subscription.unsubscribe();
    }
}
