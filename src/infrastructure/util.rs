use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::generate_slug;

/// Slugs that keep Hebrew text and lowercase Latin text.
#[derive(Default, Clone)]
pub struct HebrewSlugGenerator;

impl SlugGenerator for HebrewSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}
