/// Test data factories using builder pattern
use wayfarer::modules::catalog::{ItemType, TravelItem};

pub struct TravelItemFactory {
    id: String,
    item_type: ItemType,
    title: String,
    subtitle: String,
    price: f64,
    rating: f32,
    details: Vec<String>,
    from: Option<String>,
    to: Option<String>,
}

impl TravelItemFactory {
    pub fn new(item_type: ItemType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_type,
            title: format!("Test {}", item_type),
            subtitle: String::new(),
            price: 1000.0,
            rating: 4.0,
            details: Vec::new(),
            from: None,
            to: None,
        }
    }

    pub fn flight(id: impl Into<String>) -> Self {
        Self::new(ItemType::Flight, id)
    }

    pub fn hotel(id: impl Into<String>) -> Self {
        Self::new(ItemType::Hotel, id)
    }

    pub fn cab(id: impl Into<String>) -> Self {
        Self::new(ItemType::Cab, id)
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = subtitle.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn details(mut self, details: &[&str]) -> Self {
        self.details = details.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn route(mut self, from: &str, to: &str) -> Self {
        self.from = Some(from.to_string());
        self.to = Some(to.to_string());
        self
    }

    pub fn from(mut self, from: &str) -> Self {
        self.from = Some(from.to_string());
        self
    }

    pub fn to(mut self, to: &str) -> Self {
        self.to = Some(to.to_string());
        self
    }

    pub fn build(self) -> TravelItem {
        TravelItem {
            id: self.id,
            item_type: self.item_type,
            title: self.title,
            subtitle: self.subtitle,
            price: self.price,
            rating: self.rating,
            details: self.details,
            from: self.from,
            to: self.to,
            image: None,
        }
    }
}

/// `count` flights cycling over a few routes; ids sort in creation order
pub fn flights_on_routes(count: usize, routes: &[(&str, &str)]) -> Vec<TravelItem> {
    (0..count)
        .map(|i| {
            let (from, to) = routes[i % routes.len()];
            TravelItemFactory::flight(format!("fl-{:03}", i))
                .title(&format!("IndiGo 6E-{}", 100 + i))
                .subtitle(&format!("{} → {} • Non-stop", from, to))
                .route(from, to)
                .build()
        })
        .collect()
}
