//! Home page hero carousel.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::error::{Result, StorefrontError};

/// One hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    /// Call-to-action button label.
    pub cta: String,
}

impl Slide {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image: impl Into<String>,
        cta: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            image: image.into(),
            cta: cta.into(),
        }
    }
}

/// The slide deck and which slide is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCarousel {
    slides: Vec<Slide>,
    current: usize,
}

impl Default for HeroCarousel {
    fn default() -> Self {
        Self {
            slides: standard_slides(),
            current: 0,
        }
    }
}

impl HeroCarousel {
    /// Build a carousel; at least one slide is required.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(StorefrontError::InvalidConfig(
                "hero carousel needs at least one slide".to_string(),
            ));
        }
        Ok(Self { slides, current: 0 })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Advance one slide, wrapping to the first.
    pub fn next(&mut self) -> &Slide {
        self.current = (self.current + 1) % self.slides.len();
        self.current()
    }

    /// Go back one slide, wrapping to the last.
    pub fn previous(&mut self) -> &Slide {
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        self.current()
    }

    /// Jump to a slide (the dot indicators). Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}

fn standard_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "Transform Your Home Into a Professional Gym",
            "Discover premium equipment that delivers results",
            "https://images.unsplash.com/photo-1534258936925-c58bed479fcb?w=1200&h=600&fit=crop",
            "Shop Now",
        ),
        Slide::new(
            "Professional Grade Equipment",
            "Built to last, designed to perform",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=1200&h=600&fit=crop",
            "View Products",
        ),
        Slide::new(
            "Your Fitness Journey Starts Here",
            "Expert-selected gear for every fitness level",
            "https://images.unsplash.com/photo-1540497077202-7c8a3999166f?w=1200&h=600&fit=crop",
            "Get Started",
        ),
    ]
}

/// Background task that advances a shared carousel on a fixed interval.
///
/// The task is aborted when this handle is stopped or dropped.
#[derive(Debug)]
pub struct AutoAdvance {
    handle: JoinHandle<()>,
}

impl AutoAdvance {
    /// Start advancing; the first change happens one interval from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(carousel: Arc<Mutex<HeroCarousel>>, interval: Duration) -> Self {
        let start = Instant::now() + interval;
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(start, interval);
            loop {
                ticker.tick().await;
                let mut carousel = carousel.lock().await;
                carousel.next();
                tracing::trace!(slide = carousel.current_index(), "hero slide advanced");
            }
        });
        tracing::debug!(interval_ms = interval.as_millis() as u64, "hero auto-advance started");
        Self { handle }
    }

    /// Cancel the timer.
    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("hero auto-advance stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_wrap() {
        let mut carousel = HeroCarousel::default();
        assert_eq!(carousel.len(), 3);
        assert_eq!(carousel.current().cta, "Shop Now");

        carousel.previous();
        assert_eq!(carousel.current_index(), 2);
        carousel.next();
        assert_eq!(carousel.current_index(), 0);

        for _ in 0..7 {
            carousel.next();
        }
        assert_eq!(carousel.current_index(), 7 % 3);
    }

    #[test]
    fn test_go_to() {
        let mut carousel = HeroCarousel::default();
        assert!(carousel.go_to(2));
        assert_eq!(carousel.current().title, "Your Fitness Journey Starts Here");
        assert!(!carousel.go_to(3));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(HeroCarousel::new(Vec::new()).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_ticks() {
        let carousel = Arc::new(Mutex::new(HeroCarousel::default()));
        let auto = AutoAdvance::spawn(carousel.clone(), Duration::from_millis(5000));

        tokio::time::sleep(Duration::from_millis(4900)).await;
        assert_eq!(carousel.lock().await.current_index(), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        assert_eq!(carousel.lock().await.current_index(), 1);
        assert!(auto.is_running());

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        tokio::task::yield_now().await;
        assert_eq!(carousel.lock().await.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timer() {
        let carousel = Arc::new(Mutex::new(HeroCarousel::default()));
        let auto = AutoAdvance::spawn(carousel.clone(), Duration::from_millis(5000));
        auto.stop();

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(carousel.lock().await.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_timer() {
        let carousel = Arc::new(Mutex::new(HeroCarousel::default()));
        {
            let _auto = AutoAdvance::spawn(carousel.clone(), Duration::from_millis(5000));
            tokio::time::sleep(Duration::from_millis(5100)).await;
            tokio::task::yield_now().await;
            assert_eq!(carousel.lock().await.current_index(), 1);
        }

        tokio::time::sleep(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert_eq!(carousel.lock().await.current_index(), 1);
    }
}
