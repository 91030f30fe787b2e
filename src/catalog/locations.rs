pub const ITEMS: [(&str, &str); 3] = [
    // Villa
    (
        "https://images.unsplash.com/photo-1577593980495-6e7f67824477",
        "location1.jpg",
    ),
    // Palace
    (
        "https://images.unsplash.com/photo-1451976426598-a7593bd6d0b2",
        "location2.jpg",
    ),
    // Lake villa
    (
        "https://images.unsplash.com/photo-1512917774080-9991f1c4c750",
        "location3.jpg",
    ),
];
