//! Static project content for the detail modal.
//!
//! The table is fixed at compile time and read-only; everything the modal
//! renders comes verbatim from these records, in the order they are listed.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A single portfolio project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub hero_image: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub impact: &'static str,
    pub screenshots: &'static [&'static str],
}

/// All projects, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        id: "obsidian",
        title: "Obsidian Secure Vault",
        tags: &["Web Crypto API", "Supabase", "Zero Knowledge", "AES-GCM"],
        live_url: "https://obsidiansecurity.vercel.app/",
        source_url: "https://github.com/Moyinks/obsidian.git",
        hero_image: "image1a.png",
        problem: "Users lacked a truly private, client-side encrypted vault for \
                  sensitive data, forcing reliance on trust-based cloud providers. \
                  The challenge was building true Zero-Knowledge encryption into a \
                  Progressive Web App (PWA) that could function reliably offline.",
        solution: "A PWA implementing Client-Side End-to-End Encryption using the \
                  browser's Web Crypto API (AES-GCM for encryption and PBKDF2 for \
                  key derivation). Data is encrypted before leaving the browser, \
                  ensuring the server (Supabase) never holds unencrypted user \
                  secrets. Offline support is achieved using a Service Worker and \
                  IndexedDB for local caching and synchronization.",
        impact: "Established a market-ready, zero-knowledge data vault, preserving \
                  user privacy and providing access to sensitive records even in \
                  offline or intermittent network conditions. This model completely \
                  removes the threat of server-side data breaches compromising user \
                  information.",
        screenshots: &["image1b.png", "image1c.png", "image1d.png"],
    },
    Project {
        id: "quickshop",
        title: "QuickShop Inventory",
        tags: &["Firebase Sync", "IndexedDB", "Auth", "Optimistic UI", "PWA"],
        live_url: "https://quickshop-ten.vercel.app/",
        source_url: "https://github.com/Moyinks/QuickShop.git",
        hero_image: "image2a.png",
        problem: "Retail Point-of-Sale (POS) systems in areas with poor internet \
                  connectivity suffer from frustrating latency and transaction \
                  failures, leading to poor user experience and lost sales.",
        solution: "Developed a mobile-first PWA with an Optimistic UI, giving \
                  instant feedback to the user on every action, regardless of \
                  network status. Transactions are immediately written to \
                  IndexedDB, and a background Service Worker manages \
                  synchronization, queuing failed transactions and automatically \
                  retrying when a stable connection is detected, ensuring data \
                  eventual consistency.",
        impact: "Created a resilient POS system capable of operating continuously \
                  in 100% offline mode. The Optimistic UI provides a seamless user \
                  experience, eliminating perceived latency and dramatically \
                  increasing operational reliability in low-bandwidth environments.",
        screenshots: &["image2b.png", "image2c.png", "image2d.png"],
    },
];

/// Look up a project by identifier.
pub fn project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
