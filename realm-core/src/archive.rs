//! Built-in placeholder archive.
//!
//! Used whenever no export URL is configured or the remote fetch fails, so
//! the gallery always has something to browse.

use rand::Rng;

use crate::types::{Category, Rarity, Record};

const MAIN_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=400&h=600&fit=crop",
    "https://images.unsplash.com/photo-1552820728-8b83bb6b773f?w=400&h=600&fit=crop",
    "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=400&h=600&fit=crop",
];

const EXTRA_IMAGES: [&str; 3] = [
    "https://picsum.photos/400/400?random=1",
    "https://picsum.photos/400/400?random=2",
    "https://picsum.photos/400/400?random=3",
];

/// Generate `per_category` placeholder records for every category using the
/// thread-local RNG for rarity grades.
#[must_use]
pub fn placeholder_archive(per_category: usize) -> Vec<Record> {
    placeholder_archive_with_rng(per_category, &mut rand::thread_rng())
}

/// Generate the placeholder archive with a caller-supplied RNG.
///
/// Records are ordered by category (menu order), then by index. Names are
/// `"{Category} Legend {i}"` with `i` starting at 1.
pub fn placeholder_archive_with_rng<R: Rng + ?Sized>(per_category: usize, rng: &mut R) -> Vec<Record> {
    let mut records = Vec::with_capacity(per_category * Category::ALL.len());

    for category in Category::ALL {
        for i in 0..per_category {
            let rarity = Rarity::ALL[rng.gen_range(0..Rarity::ALL.len())];
            records.push(
                Record::new(category, format!("{category} Legend {}", i + 1))
                    .with_nickname(format!("Title of {category}"))
                    .with_rarity(rarity)
                    .with_images(MAIN_IMAGES[i % MAIN_IMAGES.len()], EXTRA_IMAGES)
                    .with_tags(format!("{category}, Power, Ancient"))
                    .with_story(format!(
                        "Born from the fragments of the old world, this {category} possesses \
                         power beyond mortal comprehension. Legend says that seeing its true \
                         form brings either infinite wisdom or eternal madness."
                    )),
            );
        }
    }

    records
}
