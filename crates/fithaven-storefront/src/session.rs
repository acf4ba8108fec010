//! Storefront session.

use std::sync::Arc;

use fithaven_commerce::assistant::{CannedAnswers, ScriptedAssistant};
use fithaven_commerce::cart::{Cart, PricingPolicy};
use fithaven_commerce::catalog::{CatalogProvider, FixtureCatalog};
use fithaven_commerce::contact::ContactForm;
use fithaven_commerce::{CommerceError, ProductId};
use tokio::sync::Mutex;

use crate::carousel::{AutoAdvance, HeroCarousel};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::pages::{CartPage, CatalogPage, ComparisonPage, ProductPage};

/// Lines the cart page shows on a fresh demo visit.
pub const DEMO_CART: [(ProductId, i64); 2] = [(ProductId::new(1), 1), (ProductId::new(2), 2)];

/// One shopper's visit: the catalog, settings, and the cart that outlives
/// page changes.
pub struct Storefront {
    catalog: Arc<dyn CatalogProvider>,
    config: StorefrontConfig,
    policy: PricingPolicy,
    answers: CannedAnswers,
    pub cart: Cart,
}

impl Storefront {
    /// Start a session over any catalog.
    ///
    /// The configured currency must be the one the catalog is priced in.
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: StorefrontConfig) -> Result<Self> {
        config.validate()?;
        let policy = config.pricing_policy()?;
        if let Some(product) = catalog
            .products()
            .iter()
            .find(|p| p.price.currency != policy.currency())
        {
            return Err(StorefrontError::InvalidConfig(format!(
                "pricing.currency is {} but product {} is priced in {}",
                policy.currency().code(),
                product.id,
                product.price.currency.code()
            )));
        }
        let answers = config.canned_answers()?;
        tracing::debug!(
            products = catalog.products().len(),
            topics = answers.len(),
            "storefront session started"
        );

        Ok(Self {
            catalog,
            config,
            policy,
            answers,
            cart: Cart::new(),
        })
    }

    /// Start a session over the embedded fixture catalog.
    pub fn with_fixtures(config: StorefrontConfig) -> Result<Self> {
        Self::new(Arc::new(FixtureCatalog::load()?), config)
    }

    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.catalog.as_ref()
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn pricing_policy(&self) -> &PricingPolicy {
        &self.policy
    }

    pub fn catalog_page(&self) -> CatalogPage {
        CatalogPage::new(Arc::clone(&self.catalog))
    }

    pub fn product_page(&self, id: ProductId) -> Result<ProductPage> {
        Ok(ProductPage::open(self.catalog.as_ref(), id)?)
    }

    /// Fill the cart with the [`DEMO_CART`] lines.
    pub fn seed_demo_cart(&mut self) -> Result<()> {
        for (id, quantity) in DEMO_CART {
            let product = self
                .catalog
                .product(id)
                .ok_or(CommerceError::ProductNotFound(id))?;
            self.cart.add_item(product, quantity)?;
        }
        tracing::debug!(lines = self.cart.unique_item_count(), "demo cart seeded");
        Ok(())
    }

    pub fn cart_page(&mut self) -> CartPage<'_> {
        CartPage::new(&mut self.cart, &self.policy)
    }

    pub fn comparison_page(&self) -> Result<ComparisonPage> {
        Ok(ComparisonPage::with_defaults(self.catalog.as_ref())?)
    }

    /// A fresh chat widget using the configured topic table.
    pub fn assistant(&self) -> ScriptedAssistant {
        ScriptedAssistant::new(self.answers.clone())
    }

    pub fn contact_form(&self) -> ContactForm {
        ContactForm::default()
    }

    /// Start advancing a hero carousel at the configured interval.
    pub fn start_hero(&self, carousel: Arc<Mutex<HeroCarousel>>) -> AutoAdvance {
        AutoAdvance::spawn(carousel, self.config.hero.interval())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssistantConfig;
    use fithaven_commerce::assistant::{AssistantError, CannedAnswer};

    #[test]
    fn test_pages_share_cart() {
        let mut store = Storefront::with_fixtures(StorefrontConfig::default()).unwrap();

        let catalog = store.catalog_page();
        catalog.add_to_cart(&mut store.cart, ProductId::new(1)).unwrap();

        let mut product = store.product_page(ProductId::new(2)).unwrap();
        product.quantity.set(2);
        product.add_to_cart(&mut store.cart).unwrap();

        let summary = store.cart_page().summary().unwrap();
        assert_eq!(summary.pricing().unwrap().total.display(), "$1616.76");
    }

    fn config_with_topics(topics: Vec<CannedAnswer>) -> StorefrontConfig {
        StorefrontConfig {
            assistant: AssistantConfig {
                topics: Some(topics),
            },
            ..StorefrontConfig::default()
        }
    }

    #[test]
    fn test_assistant_uses_configured_topics() {
        let topics = [
            ("Store Hours", "9 to 5"),
            ("Gift Cards", "Available in store."),
            ("Financing", "Ask about monthly plans."),
            ("Assembly", "Free for orders over $500."),
            ("Trade-ins", "Bring your old gear."),
        ]
        .into_iter()
        .map(|(topic, answer)| CannedAnswer::new(topic, answer))
        .collect();
        let store = Storefront::with_fixtures(config_with_topics(topics)).unwrap();
        let mut assistant = store.assistant();
        assistant.open();
        assert_eq!(assistant.current_options().len(), 5);
        assert_eq!(assistant.select_topic("Store Hours").unwrap()[1].text, "9 to 5");
    }

    #[test]
    fn test_demo_cart_totals() {
        let mut store = Storefront::with_fixtures(StorefrontConfig::default()).unwrap();
        store.seed_demo_cart().unwrap();
        assert_eq!(store.cart.item_count(), 3);

        let summary = store.cart_page().summary().unwrap();
        let pricing = summary.pricing().unwrap();
        assert_eq!(pricing.subtotal.display(), "$1497.00");
        assert!(pricing.has_free_shipping());
        assert_eq!(pricing.tax.display(), "$119.76");
        assert_eq!(pricing.total.display(), "$1616.76");
    }

    #[test]
    fn test_short_topic_table_rejected() {
        let config = config_with_topics(vec![CannedAnswer::new("Only", "one")]);
        assert!(matches!(
            Storefront::with_fixtures(config),
            Err(StorefrontError::Assistant(AssistantError::TopicCount {
                expected: 5,
                got: 1
            }))
        ));
    }

    #[test]
    fn test_currency_must_match_catalog() {
        let mut config = StorefrontConfig::default();
        config.pricing.currency = "EUR".to_string();
        assert!(config.validate().is_ok());

        let err = Storefront::with_fixtures(config).err().unwrap();
        assert!(matches!(err, StorefrontError::InvalidConfig(_)));
        assert!(err.to_string().contains("priced in USD"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = StorefrontConfig::default();
        config.hero.interval_ms = 0;
        assert!(matches!(
            Storefront::with_fixtures(config),
            Err(StorefrontError::InvalidConfig(_))
        ));
    }
}
