//! Minimal metrics registry for the order service.
//!
//! Counter and histogram types with dynamic labels backed by `DashMap`.
//! Labels are flattened into sorted key vectors to keep deterministic
//! ordering. The order gauge is pull-based: its value is sampled by the caller
//! at render time instead of being stored here.

use dashmap::DashMap;
use rust_decimal::Decimal;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use orderly_core::MetricsSink;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn render_labels(key: &[(String, String)]) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for an exact label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let label_str = render_labels(r.key());
            if label_str.is_empty() {
                let _ = writeln!(out, "{} {}", name, val);
            } else {
                let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
            }
        }
    }
}

// Upper bounds for products-per-order buckets.
const BUCKETS: [u64; 9] = [0, 1, 2, 3, 5, 10, 25, 50, 100];

struct AtomicHistogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; BUCKETS.len()],
}

impl Default for AtomicHistogram {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum: AtomicU64::new(0),
            buckets: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<Vec<(String, String)>, AtomicHistogram>,
}

impl HistogramVec {
    /// Observe an integer value and increment cumulative buckets.
    pub fn observe(&self, labels: &[(&str, &str)], value: u64) {
        let hist = self
            .map
            .entry(label_key(labels))
            .or_insert_with(AtomicHistogram::default);

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum.fetch_add(value, Ordering::Relaxed);

        for (bucket, &le) in hist.buckets.iter().zip(BUCKETS.iter()) {
            if value <= le {
                bucket.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// `(count, sum)` for an exact label set.
    pub fn snapshot(&self, labels: &[(&str, &str)]) -> (u64, u64) {
        self.map
            .get(&label_key(labels))
            .map(|h| (h.count.load(Ordering::Relaxed), h.sum.load(Ordering::Relaxed)))
            .unwrap_or((0, 0))
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} histogram", name);
        for r in self.map.iter() {
            let hist = r.value();
            let label_str = render_labels(r.key());
            let (prefix, braced) = if label_str.is_empty() {
                (String::new(), String::new())
            } else {
                (format!("{},", label_str), format!("{{{}}}", label_str))
            };

            for (bucket, &le) in hist.buckets.iter().zip(BUCKETS.iter()) {
                let count = bucket.load(Ordering::Relaxed);
                let _ = writeln!(out, "{}_bucket{{{}le=\"{}\"}} {}", name, prefix, le, count);
            }
            let count = hist.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_bucket{{{}le=\"+Inf\"}} {}", name, prefix, count);

            let sum = hist.sum.load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_sum{} {}", name, braced, sum);
            let _ = writeln!(out, "{}_count{} {}", name, braced, count);
        }
    }
}

#[derive(Default)]
pub struct OrderMetrics {
    pub products_created: CounterVec,
    pub orders_created: CounterVec,
    pub order_sizes: HistogramVec,
    draining: AtomicBool,
}

impl OrderMetrics {
    /// Mark draining state.
    pub fn set_draining(&self) {
        self.draining.store(true, Ordering::Relaxed);
    }

    /// Return whether draining is active.
    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Relaxed)
    }

    /// Render all registered metrics. `order_count` is the sampled value of
    /// the live order gauge.
    pub fn render(&self, order_count: usize) -> String {
        let mut out = String::new();
        self.products_created.render(
            "orderly_products_created_total",
            "Products added to the catalog, by price.",
            &mut out,
        );
        self.orders_created.render(
            "orderly_orders_created_total",
            "Orders created.",
            &mut out,
        );
        let _ = writeln!(out, "# HELP orderly_orders Orders currently held.");
        let _ = writeln!(out, "# TYPE orderly_orders gauge\norderly_orders {}", order_count);
        self.order_sizes.render(
            "orderly_products_per_order",
            "Distribution of products per order (unit: products).",
            &mut out,
        );

        let draining = u8::from(self.is_draining());
        let _ = writeln!(out, "# HELP orderly_draining 1 while the service is shutting down.");
        let _ = writeln!(out, "# TYPE orderly_draining gauge\norderly_draining {}", draining);
        out
    }
}

impl MetricsSink for OrderMetrics {
    fn product_created(&self, price: &Decimal) {
        let price = price.normalize().to_string();
        self.products_created.inc(&[("product_price", price.as_str())]);
    }

    fn order_created(&self) {
        self.orders_created.inc(&[]);
    }

    fn products_per_order(&self, count: usize) {
        self.order_sizes.observe(&[], count as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_labels_are_order_independent() {
        let c = CounterVec::default();
        c.inc(&[("a", "1"), ("b", "2")]);
        c.inc(&[("b", "2"), ("a", "1")]);
        assert_eq!(c.get(&[("a", "1"), ("b", "2")]), 2);
    }

    #[test]
    fn product_counter_normalizes_price_label() {
        let m = OrderMetrics::default();
        m.product_created(&Decimal::new(1000, 2));
        m.product_created(&Decimal::new(10, 0));
        assert_eq!(m.products_created.get(&[("product_price", "10")]), 2);
    }

    #[test]
    fn histogram_buckets_are_cumulative() {
        let m = OrderMetrics::default();
        m.products_per_order(2);
        m.products_per_order(4);

        let out = m.render(0);
        assert!(out.contains("orderly_products_per_order_bucket{le=\"1\"} 0"));
        assert!(out.contains("orderly_products_per_order_bucket{le=\"2\"} 1"));
        assert!(out.contains("orderly_products_per_order_bucket{le=\"5\"} 2"));
        assert!(out.contains("orderly_products_per_order_bucket{le=\"+Inf\"} 2"));
        assert!(out.contains("orderly_products_per_order_sum 6"));
        assert!(out.contains("orderly_products_per_order_count 2"));
        assert!(out.contains(
            "# HELP orderly_products_per_order Distribution of products per order (unit: products)."
        ));
        assert!(out.contains("# TYPE orderly_products_per_order histogram"));
    }

    #[test]
    fn render_includes_sampled_gauge_and_draining() {
        let m = OrderMetrics::default();
        m.order_created();
        let out = m.render(3);
        assert!(out.contains("orderly_orders_created_total 1"));
        assert!(out.contains("orderly_orders 3"));
        assert!(out.contains("orderly_draining 0"));

        m.set_draining();
        assert!(m.render(3).contains("orderly_draining 1"));
    }

    #[test]
    fn escapes_label_values() {
        assert_eq!(escape_label("a\"b\\c"), "a\\\"b\\\\c");
    }
}
