// (source, file name)
pub const ITEMS: [(&str, &str); 3] = [
    // Luxury dinner
    (
        "https://images.unsplash.com/photo-1414235077428-338989a2e8c0",
        "event1.jpg",
    ),
    // Rooftop party
    (
        "https://images.unsplash.com/photo-1519214605650-76a613ee3245",
        "event2.jpg",
    ),
    // Pool party
    (
        "https://images.unsplash.com/photo-1576013551627-0cc20b96c2a7",
        "event3.jpg",
    ),
];
