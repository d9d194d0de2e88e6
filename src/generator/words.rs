//! Fixed word lists the payload generators draw descriptive text from.

pub const FIRST_NAMES: &[&str] = &[
    "An", "Binh", "Chi", "Dung", "Giang", "Hanh", "Hoa", "Khanh", "Lan", "Linh", "Mai", "Minh",
    "Nam", "Ngoc", "Phuong", "Quan", "Son", "Thao", "Trang", "Tuan",
];

pub const LAST_NAMES: &[&str] = &[
    "Nguyen", "Tran", "Le", "Pham", "Hoang", "Huynh", "Phan", "Vu", "Vo", "Dang", "Bui", "Do",
    "Ho", "Ngo", "Duong",
];

pub const STREET_NAMES: &[&str] = &[
    "Le Loi", "Nguyen Hue", "Tran Hung Dao", "Hai Ba Trung", "Ly Thuong Kiet", "Pasteur",
    "Dien Bien Phu", "Vo Van Tan", "Cach Mang Thang Tam", "Nguyen Thi Minh Khai",
];

pub const CITIES: &[&str] = &[
    "Ho Chi Minh City",
    "Hanoi",
    "Da Nang",
    "Can Tho",
    "Hai Phong",
    "Nha Trang",
    "Hue",
    "Vung Tau",
];

pub const ADDRESS_TITLES: &[&str] = &["Home", "Work", "Office", "Apartment", "Parents' House"];

pub const FOOD_CATEGORIES: &[&str] = &[
    "Pho & Noodles",
    "Rice Dishes",
    "Banh Mi",
    "Seafood",
    "Hotpot",
    "Grilled & BBQ",
    "Vegetarian",
    "Desserts",
    "Bubble Tea",
    "Coffee",
    "Street Food",
    "Fast Food",
];

pub const DISH_ADJECTIVES: &[&str] = &[
    "Spicy", "Crispy", "Golden", "Smoky", "Sweet", "Savory", "Sizzling", "Fresh", "Tangy",
    "Fragrant", "House Special", "Double",
];

pub const DISH_NOUNS: &[&str] = &[
    "Pho", "Banh Mi", "Spring Rolls", "Fried Rice", "Grilled Pork", "Chicken Wings",
    "Beef Noodles", "Dumplings", "Curry", "Com Tam", "Hotpot Set", "Wonton Soup",
];

pub const RESTAURANT_PREFIXES: &[&str] = &[
    "Golden", "Lucky", "Happy", "Royal", "Sunrise", "Riverside", "Old Quarter", "Night Market",
    "Corner", "Mama's",
];

pub const RESTAURANT_SUFFIXES: &[&str] = &[
    "Kitchen", "Eatery", "Bistro", "Diner", "Garden", "House", "Grill", "Express", "Corner",
    "Noodle Bar",
];

pub const VEHICLE_MODELS: &[&str] = &[
    "Honda Wave",
    "Yamaha Sirius",
    "Honda Vision",
    "Suzuki Raider",
    "Honda Air Blade",
    "Yamaha Exciter",
];

pub const VEHICLE_COLORS: &[&str] = &["Red", "Blue", "Black", "White", "Silver", "Green"];

pub const VARIANT_NAMES: &[&str] = &["Small", "Medium", "Large", "Extra Large", "Combo"];

pub const PROMOTION_NAMES: &[&str] = &[
    "Lunch Rush Deal",
    "Weekend Feast",
    "Midnight Cravings",
    "First Order Treat",
    "Rainy Day Special",
    "Payday Party",
];

pub const INQUIRY_SUBJECTS: &[&str] = &[
    "Order arrived late",
    "Missing item in order",
    "Wrong dish delivered",
    "Refund request",
    "Driver could not find address",
    "App payment failed",
];

pub const INQUIRY_PRIORITIES: &[&str] = &["LOW", "MEDIUM", "HIGH", "URGENT"];

pub const FOOD_REVIEWS: &[&str] = &[
    "Delicious, will order again.",
    "Portion was generous for the price.",
    "A bit too salty for my taste.",
    "Arrived warm and fresh.",
    "The best in the neighborhood.",
    "Average, nothing special.",
];

pub const DELIVERY_REVIEWS: &[&str] = &[
    "Driver was fast and friendly.",
    "Took longer than the estimate.",
    "Smooth delivery, no issues.",
    "Driver called ahead, great service.",
    "Packaging survived the trip intact.",
];

pub const CUSTOMER_NOTES: &[&str] = &[
    "",
    "Extra chili please.",
    "No onions.",
    "Leave at the front desk.",
    "Call on arrival.",
    "Include cutlery.",
];
