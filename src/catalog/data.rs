use super::{CategoryDescriptor, ScenarioDescriptor, ALL_CATEGORIES};

pub(super) const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor { id: ALL_CATEGORIES, label: "全部场景 (All)" },
    CategoryDescriptor { id: "travel", label: "旅行出行 (Travel)" },
    CategoryDescriptor { id: "transport", label: "交通驾驶 (Transport)" },
    CategoryDescriptor { id: "accommodation", label: "住宿 (Accommodation)" },
    CategoryDescriptor { id: "dining", label: "餐饮美食 (Dining)" },
    CategoryDescriptor { id: "shopping", label: "购物消费 (Shopping)" },
    CategoryDescriptor { id: "life", label: "日常生活 (Daily Life)" },
    CategoryDescriptor { id: "work", label: "工作职场 (Work)" },
    CategoryDescriptor { id: "education", label: "教育学习 (Education)" },
    CategoryDescriptor { id: "medical", label: "医疗健康 (Health)" },
    CategoryDescriptor { id: "social", label: "社交娱乐 (Social)" },
    CategoryDescriptor { id: "service", label: "公共服务 (Services)" },
    CategoryDescriptor { id: "emergency", label: "紧急状况 (Emergency)" },
];

pub(super) const SCENARIOS: &[ScenarioDescriptor] = &[
    // Travel: Air
    s("airport_checkin", "Airport Check-in", "机场值机", "travel", "plane", "Bags, passports, and tickets"),
    s("airport_security", "Airport Security", "机场安检", "travel", "plane", "X-ray, belts, and liquids"),
    s("boarding_gate", "Boarding Gate", "登机口", "travel", "plane", "Announcements and seating"),
    s("in_flight", "In Flight", "飞行中", "travel", "plane", "Meals, safety, and comfort"),
    s("in_flight_sickness", "In-Flight Sickness", "晕机/不适", "travel", "plane", "Nausea, assistance, water"),
    s("flight_delay", "Flight Delay", "航班延误", "travel", "plane", "Rebooking, compensation, hotels"),
    s("missed_connection", "Missed Connection", "错通过程航班", "travel", "plane", "Running, schedules, help desk"),
    s("customs", "Customs", "海关入境", "travel", "plane", "Declarations and purpose of visit"),
    s("baggage_claim", "Baggage Claim", "行李提取", "travel", "plane", "Lost luggage and carousels"),
    s("lost_luggage", "Lost Luggage", "行李丢失", "travel", "plane", "Forms, descriptions, delivery"),
    s("visa_issues", "Visa Issues", "签证问题", "travel", "plane", "Documents, explanations, officers"),
    // Travel: Land & Sea
    s("train_station", "Train Station", "火车站", "transport", "train", "Platforms and timetables"),
    s("buying_train_ticket", "Buying Train Ticket", "购买火车票", "transport", "train", "Kiosk, window, destinations"),
    s("on_the_train", "On the Train", "火车上", "transport", "train", "Conductors and dining cars"),
    s("subway", "Taking the Subway", "乘坐地铁", "transport", "train", "Maps, transfers, and cards"),
    s("subway_nav", "Subway Navigation", "地铁换乘", "transport", "train", "Exits, lines, transfers"),
    s("taxi", "Taking a Taxi", "乘坐出租车", "transport", "train", "Destinations and fares"),
    s("ride_share", "Ride Share", "网约车", "transport", "train", "Pickup spot, rating, route"),
    s("bus", "Taking the Bus", "乘坐公交", "transport", "train", "Stops and exact change"),
    s("long_distance_bus", "Long Distance Bus", "长途大巴", "transport", "train", "Luggage storage, breaks"),
    s("car_rental", "Car Rental", "租车", "transport", "car", "Insurance and mileage"),
    s("car_rental_return", "Returning Rental Car", "还车", "transport", "car", "Gas tank, inspection, keys"),
    s("gas_station", "Gas Station", "加油站", "transport", "car", "Pumping gas and tire pressure"),
    s("asking_directions", "Asking Directions", "问路", "travel", "sparkles", "Left, right, and landmarks"),
    s("cruise_checkin", "Cruise Check-in", "邮轮登船", "travel", "plane", "Cabin, safety drill, dining"),
    s("ferry", "Taking a Ferry", "乘坐轮渡", "transport", "train", "Tickets, seating, cars"),
    // Automotive
    s("flat_tire", "Flat Tire", "爆胎", "transport", "car", "Jack, spare tire, assistance"),
    s("engine_trouble", "Engine Trouble", "引擎故障", "transport", "car", "Smoke, noises, mechanic"),
    s("car_accident", "Car Accident", "交通事故", "emergency", "car", "Insurance and police"),
    s("traffic_stop", "Police Traffic Stop", "交警拦车", "transport", "car", "License, registration, speeding"),
    s("parking", "Parking Garage", "停车场", "transport", "car", "Tickets, payments, validation"),
    s("parking_ticket", "Parking Ticket", "停车罚单", "transport", "car", "Fine, violation, appeals"),
    s("buying_car", "Buying Used Car", "买二手车", "transport", "car", "Mileage, history, test drive"),
    s("car_wash", "Car Wash", "洗车", "transport", "car", "Soap, wax, vacuum"),
    // Accommodation
    s("hotel_checkin", "Hotel Check-in", "酒店入住", "accommodation", "home", "Reservations and key cards"),
    s("hotel_room", "Hotel Room Issues", "房间问题", "accommodation", "home", "AC, towels, and noise"),
    s("hotel_concierge", "Concierge", "礼宾服务", "accommodation", "home", "Recommendations and bookings"),
    s("hotel_checkout", "Hotel Check-out", "退房", "accommodation", "home", "Bill and mini-bar"),
    s("hotel_breakfast", "Hotel Breakfast", "酒店早餐", "accommodation", "home", "Buffet, seating, hours"),
    s("airbnb", "Airbnb/Rental", "民宿入住", "accommodation", "home", "House rules and lockboxes"),
    s("airbnb_host", "Messaging Host", "联系房东", "accommodation", "home", "Arrival time, wifi, keys"),
    s("hostel", "Youth Hostel", "青年旅舍", "accommodation", "home", "Shared rooms and lockers"),
    s("camping_checkin", "Campsite", "露营地", "accommodation", "home", "Tent site, RV hookup"),
    // Dining
    s("cafe", "Coffee Shop", "咖啡店", "dining", "coffee", "Lattes, sizes, and pastries"),
    s("fast_food", "Fast Food", "快餐店", "dining", "food", "Combos and take-out"),
    s("restaurant_reservation", "Reservation", "餐厅预订", "dining", "food", "Tables and times"),
    s("ordering_food", "Ordering Food", "点餐", "dining", "food", "Menu items and specials"),
    s("ordering_steak", "Ordering Steak", "点牛排", "dining", "food", "Rare, medium, well-done"),
    s("ordering_wine", "Ordering Wine", "点酒", "dining", "food", "Red, white, glass, bottle"),
    s("dietary_restrictions", "Dietary Restrictions", "饮食禁忌", "dining", "food", "Allergies and preferences"),
    s("vegan_ordering", "Ordering Vegan", "素食点餐", "dining", "food", "Dairy-free, meat-free"),
    s("paying_bill", "Paying the Bill", "买单", "dining", "food", "Splitting and tipping"),
    s("complaining_food", "Food Complaint", "投诉菜品", "dining", "food", "Cold, wrong order, taste"),
    s("bar", "At a Bar", "酒吧", "dining", "coffee", "Drinks and tabs"),
    s("bakery", "Bakery", "面包房", "dining", "coffee", "Bread and sweets"),
    s("pizza_shop", "Ordering Pizza", "订披萨", "dining", "food", "Toppings and delivery"),
    s("ice_cream", "Ice Cream Shop", "冰淇淋店", "dining", "food", "Scoops, flavors, cones"),
    s("buffet", "Buffet Dining", "自助餐", "dining", "food", "All you can eat, plates"),
    s("street_food", "Street Food", "街头小吃", "dining", "food", "Snacks, cash, hygiene"),
    s("food_delivery_app", "Food Delivery App", "外卖APP", "dining", "device", "Tracking, refund"),
    // Shopping
    s("grocery", "Grocery Store", "杂货店/超市", "shopping", "shopping", "Produce and aisles"),
    s("deli_counter", "Deli Counter", "熟食柜台", "shopping", "shopping", "Slicing meat, cheese"),
    s("supermarket", "Checkout", "超市结账", "shopping", "shopping", "Coupons and bags"),
    s("pharmacy_shopping", "Pharmacy (Retail)", "药妆店", "shopping", "shopping", "Toiletries and medicine"),
    s("convenience_store", "Convenience Store", "便利店", "shopping", "shopping", "Snacks, drinks, atm"),
    s("market", "Flea Market", "跳蚤市场", "shopping", "shopping", "Bargaining and antiques"),
    s("farmers_market", "Farmers Market", "农夫市场", "shopping", "shopping", "Fresh produce"),
    s("clothing_store", "Clothing Store", "服装店", "shopping", "shopping", "Sizes and fitting rooms"),
    s("shoe_store", "Shoe Store", "鞋店", "shopping", "shopping", "Trying on and sizes"),
    s("electronics", "Electronics Store", "电子产品店", "shopping", "shopping", "Gadgets and warranties"),
    s("bookstore", "Bookstore", "书店", "shopping", "shopping", "Genres and bestsellers"),
    s("souvenir_shop", "Souvenir Shop", "纪念品店", "shopping", "shopping", "Gifts and postcards"),
    s("jewelry_store", "Jewelry Store", "珠宝店", "shopping", "shopping", "Rings, diamonds, repairs"),
    s("furniture_store", "Furniture Store", "家具店", "shopping", "shopping", "Delivery, sofa, assembly"),
    s("hardware_store", "Hardware Store", "五金店", "shopping", "shopping", "Tools, paint, screws"),
    s("flower_shop", "Flower Shop", "花店", "shopping", "shopping", "Bouquets, roses"),
    s("pet_store", "Pet Store", "宠物店", "shopping", "shopping", "Food, toys, adoption"),
    s("cosmetics", "Makeup Counter", "化妆品专柜", "shopping", "shopping", "Shades, samples"),
    s("perfume", "Perfume Shop", "香水店", "shopping", "shopping", "Scents, tester"),
    s("returns", "Returns", "退换货", "shopping", "shopping", "Receipts and exchanges"),
    s("duty_free", "Duty Free", "免税店", "shopping", "shopping", "Tax-free items"),
    // Daily Life
    s("home_chores", "Doing Chores", "做家务", "life", "home", "Cleaning and laundry"),
    s("cooking", "Cooking Dinner", "做晚饭", "life", "home", "Recipes and ingredients"),
    s("baking", "Baking", "烘焙", "life", "home", "Flour, oven, mixing"),
    s("gardening", "Gardening", "园艺", "life", "home", "Plants and tools"),
    s("walking_dog", "Walking Dog", "遛狗", "life", "home", "Leashes and parks"),
    s("recycling", "Recycling", "垃圾回收", "life", "home", "Sorting bins, pickup day"),
    s("delivery", "Receiving Delivery", "收快递", "life", "home", "Packages and signatures"),
    s("neighbors", "Noisy Neighbors", "噪音投诉", "life", "home", "Complaining, requests"),
    s("meeting_neighbors", "Meeting Neighbors", "遇见邻居", "life", "home", "Introductions"),
    s("home_repair", "Home Repair", "家庭维修", "life", "home", "Leaks and fixing things"),
    s("plumber", "Plumber", "水管工", "life", "home", "Clogged drain, pipes"),
    s("electrician", "Electrician", "电工", "life", "home", "Wiring, fuses, outages"),
    s("pest_control", "Pest Control", "除虫", "life", "home", "Insects, traps"),
    s("hiring_cleaner", "Hiring Cleaner", "雇佣保洁", "life", "home", "Tasks, hours, rates"),
    // Work
    s("job_interview", "Job Interview", "面试", "work", "work", "Strengths and experience"),
    s("resume", "Discussing Resume", "讨论简历", "work", "work", "Skills, education"),
    s("salary", "Salary Negotiation", "谈薪资", "work", "work", "Offers, bonuses"),
    s("first_day", "First Day", "入职第一天", "work", "work", "Introductions and tours"),
    s("meeting", "Meeting", "开会", "work", "work", "Agenda and minutes"),
    s("presentation", "Presentation", "演示汇报", "work", "work", "Slides and Q&A"),
    s("video_call", "Video Conference", "视频会议", "work", "work", "Mute, screen share"),
    s("water_cooler", "Water Cooler", "茶水间闲聊", "work", "work", "Weekend plans"),
    s("asking_leave", "Asking for Leave", "请假", "work", "work", "Vacation and sick days"),
    s("performance_review", "Performance Review", "绩效考核", "work", "work", "Feedback, goals"),
    s("resignation", "Resigning", "辞职", "work", "work", "Notice period"),
    s("firing", "Getting Fired", "被解雇", "work", "work", "Severance, reasons"),
    s("office_conflict", "Office Conflict", "办公室冲突", "work", "work", "Disagreements"),
    s("tech_support", "IT Support", "IT支持", "work", "work", "Broken laptop, login"),
    s("networking", "Networking", "商务社交", "work", "work", "Business cards"),
    s("sales_call", "Sales Call", "销售电话", "work", "work", "Pitching, leads"),
    s("client_dinner", "Client Dinner", "客户晚宴", "work", "work", "Hosting, toasts"),
    s("contract", "Signing Contract", "签合同", "work", "work", "Clauses, terms"),
    s("negotiation", "Negotiation", "商务谈判", "work", "work", "Prices, compromise"),
    s("factory_visit", "Factory Visit", "参观工厂", "work", "work", "Production line"),
    s("trade_show", "Trade Show", "贸易展会", "work", "work", "Booths, demos"),
    s("coworking", "Coworking Space", "共享办公", "work", "work", "Desks, wifi"),
    // Medical
    s("doctor_appt", "Doctor Appointment", "看医生", "medical", "medical", "Symptoms and checkups"),
    s("dentist", "Dentist", "看牙医", "medical", "medical", "Cavities, cleaning"),
    s("pharmacy_meds", "Pharmacy (Meds)", "药房买药", "medical", "medical", "Dosage, side effects"),
    s("er", "Emergency Room", "急诊室", "medical", "medical", "Urgent care, triage"),
    s("hospital_admission", "Hospital Admission", "住院登记", "medical", "medical", "Forms, insurance"),
    s("optometrist", "Eye Doctor", "看眼科", "medical", "medical", "Glasses, vision test"),
    s("calling_911", "Calling 911", "拨打急救", "emergency", "medical", "Ambulance, address"),
    s("physical_therapy", "Physical Therapy", "物理治疗", "medical", "medical", "Exercises, injury"),
    s("xray", "X-Ray/MRI", "拍X光/核磁", "medical", "medical", "Stillness, machines"),
    s("vaccination", "Vaccination", "接种疫苗", "medical", "medical", "Shot, records"),
    s("sick_child", "Sick Child", "照顾生病孩子", "medical", "medical", "Fever, medicine"),
    s("mental_health", "Therapy", "心理咨询", "medical", "medical", "Feelings, stress"),
    s("dermatologist", "Dermatologist", "看皮肤科", "medical", "medical", "Skin, rash"),
    s("gym", "At the Gym", "健身房", "medical", "medical", "Weights, cardio"),
    s("yoga", "Yoga Class", "瑜伽课", "medical", "medical", "Poses, breathing"),
    s("spa", "Spa Day", "水疗/按摩", "medical", "sparkles", "Massage, relaxation"),
    s("hair_salon", "Hair Salon", "理发店", "life", "sparkles", "Cut, color"),
    s("barber", "Barber Shop", "男士理发", "life", "sparkles", "Shave, fade"),
    s("manicure", "Nail Salon", "美甲店", "life", "sparkles", "Polish, pedicure"),
    // Service / Admin
    s("bank", "Bank", "银行", "service", "work", "Deposits, tellers"),
    s("opening_account", "Opening Account", "开户", "service", "work", "ID, forms"),
    s("loan_application", "Applying for Loan", "申请贷款", "service", "work", "Rates, credit score"),
    s("currency_exchange", "Currency Exchange", "货币兑换", "service", "work", "Rates, cash"),
    s("credit_card_fraud", "Reporting Fraud", "挂失信用卡", "service", "work", "Stolen card, block"),
    s("taxes", "Doing Taxes", "报税", "service", "work", "Forms, refund"),
    s("insurance_claim", "Insurance Claim", "保险理赔", "service", "work", "Damage, payout"),
    s("post_office", "Post Office", "邮局", "service", "work", "Stamps, packages"),
    s("real_estate", "Viewing Apartment", "看房", "service", "home", "Rent, lease"),
    s("signing_lease", "Signing Lease", "签租房合同", "service", "home", "Deposit, terms"),
    s("dmv", "DMV", "车管所", "service", "car", "Driving test, license"),
    s("voting", "Voting", "投票", "service", "work", "Ballot, id"),
    s("lawyer", "Lawyer", "见律师", "service", "work", "Advice, fees"),
    s("embassy", "Embassy", "大使馆", "service", "plane", "Passport, assistance"),
    // Education
    s("classroom", "Classroom", "在教室", "education", "work", "Questions, notes"),
    s("lecture", "University Lecture", "大学讲座", "education", "work", "Professor, slides"),
    s("library", "Library", "图书馆", "education", "work", "Studying, silence"),
    s("exam", "Taking Exam", "考试", "education", "work", "Multiple choice, time"),
    s("group_project", "Group Project", "小组作业", "education", "work", "Collaboration"),
    s("dorm", "Dorm Life", "宿舍生活", "education", "home", "Roommate, rules"),
    s("language_school", "Language School", "语言学校", "education", "work", "Grammar, speaking"),
    s("registration", "Course Registration", "选课", "education", "work", "Credits, schedule"),
    s("graduation", "Graduation", "毕业典礼", "education", "work", "Gown, diploma"),
    s("parent_teacher", "Parent-Teacher", "家长会", "education", "users", "Grades, progress"),
    // Tech
    s("buying_phone", "Buying Phone", "买手机", "service", "device", "Model, plan"),
    s("phone_repair", "Phone Repair", "修手机", "service", "device", "Screen, battery"),
    s("internet_setup", "Internet Setup", "装宽带", "service", "device", "Router, wifi"),
    s("forgot_password", "Forgot Password", "忘记密码", "service", "device", "Reset, email"),
    s("software_bug", "Reporting Bug", "报告Bug", "work", "device", "Crash, error"),
    s("printer_issues", "Printer Issues", "打印机故障", "work", "device", "Paper jam"),
    s("scam_call", "Scam Call", "诈骗电话", "emergency", "device", "Blocking, reporting"),
    // Social
    s("dating", "First Date", "初次约会", "social", "heart", "Hobbies, nerves"),
    s("party", "House Party", "家庭聚会", "social", "users", "Drinks, music"),
    s("dinner_party", "Dinner Party", "晚宴", "social", "users", "Hosting, serving"),
    s("wedding", "Wedding", "婚礼", "social", "heart", "Ceremony, toast"),
    s("birthday", "Birthday", "生日派对", "social", "sparkles", "Cake, candles"),
    s("gift_giving", "Gift Giving", "送礼物", "social", "sparkles", "Wrapping, thanks"),
    s("baby_shower", "Baby Shower", "迎婴派对", "social", "users", "Games, gifts"),
    s("compliment", "Compliments", "赞美", "social", "heart", "Clothes, work"),
    s("invitation", "Invitation", "发出邀请", "social", "users", "Plans, time"),
    s("introducing", "Introductions", "介绍朋友", "social", "users", "Names, connections"),
    s("small_talk", "Small Talk", "闲聊", "social", "users", "Weather, traffic"),
    s("apology", "Apologizing", "道歉", "social", "heart", "Mistake, sorry"),
    s("condolences", "Condolences", "慰问/哀悼", "social", "heart", "Funeral, loss"),
    s("breakup", "Breaking Up", "分手", "social", "heart", "Feelings, crying"),
    s("borrowing_money", "Borrowing Money", "借钱", "social", "work", "Request, repay"),
    s("asking_favor", "Asking Favor", "请求帮助", "social", "users", "Help, please"),
    s("declining", "Declining", "拒绝邀请", "social", "users", "Busy, sorry"),
    s("disagreement", "Argument", "争论", "social", "users", "Opinion, debate"),
    s("confrontation", "Confrontation", "对峙", "social", "users", "Problem, angry"),
    // Entertainment
    s("cinema", "Movie Theater", "电影院", "social", "sparkles", "Tickets, popcorn"),
    s("streaming", "Streaming", "看流媒体", "life", "device", "Choosing, buffering"),
    s("concert", "Concert", "演唱会", "social", "sparkles", "Live music, crowd"),
    s("music_festival", "Music Festival", "音乐节", "social", "sparkles", "Tent, wristband"),
    s("museum", "Museum", "博物馆", "social", "sparkles", "Art, history"),
    s("art_gallery", "Art Gallery", "画廊", "social", "sparkles", "Painting, buy"),
    s("theater_play", "Theater", "剧院看戏", "social", "sparkles", "Stage, actors"),
    s("zoo", "Zoo", "动物园", "social", "sparkles", "Animals, map"),
    s("aquarium", "Aquarium", "水族馆", "social", "sparkles", "Fish, tank"),
    s("theme_park", "Theme Park", "游乐园", "social", "sparkles", "Rollercoaster"),
    s("casino", "Casino", "赌场", "social", "sparkles", "Chips, cards"),
    s("nightclub", "Nightclub", "夜店", "social", "sparkles", "Dancing, dj"),
    s("karaoke", "Karaoke", "KTV", "social", "sparkles", "Singing, mic"),
    s("bowling", "Bowling", "保龄球", "social", "sparkles", "Shoes, lane"),
    s("gaming", "Video Gaming", "打游戏", "life", "device", "Online, level"),
    s("photography", "Photography", "摄影", "life", "device", "Camera, lens"),
    s("fishing", "Fishing", "钓鱼", "life", "sparkles", "Rod, bait"),
    s("hiking", "Hiking", "徒步", "life", "sparkles", "Trail, boots"),
    s("beach", "Beach", "海滩", "life", "sparkles", "Sand, sun"),
    s("skiing", "Skiing", "滑雪", "life", "sparkles", "Lift pass, snow"),
    s("golf", "Golf", "高尔夫", "life", "sparkles", "Clubs, par"),
    s("soccer", "Soccer Match", "足球赛", "social", "activity", "Goal, referee"),
    s("tennis", "Tennis Match", "网球赛", "social", "activity", "Serve, set"),
    // Other Services
    s("dry_cleaner", "Dry Cleaners", "干洗店", "service", "shopping", "Stains, ticket"),
    s("tailor", "Tailor", "裁缝店", "service", "shopping", "Hemming, fitting"),
    s("shoe_repair", "Shoe Repair", "修鞋", "service", "shopping", "Heel, sole"),
    s("photo_print", "Photo Printing", "打印照片", "service", "device", "Size, glossy"),
    s("library_public", "Public Library", "公共图书馆", "service", "home", "Card, borrow"),
    s("vet", "Veterinarian", "兽医", "service", "medical", "Pet sick, shots"),
    s("dog_groomer", "Dog Groomer", "宠物美容", "service", "sparkles", "Wash, cut"),
    // Emergency / Specific
    s("police_report", "Reporting Crime", "报警", "emergency", "medical", "Theft, officer"),
    s("lost_child", "Lost Child", "孩子走失", "emergency", "medical", "Panic, help"),
    s("lost_wallet", "Lost Wallet", "钱包丢了", "emergency", "work", "Cards, money"),
    s("fire", "Fire", "火灾", "emergency", "medical", "Smoke, evacuate"),
    s("earthquake", "Earthquake", "地震", "emergency", "medical", "Shake, cover"),
    s("power_outage", "Power Outage", "停电", "emergency", "home", "Candles, fuse"),
    s("locksmith", "Locked Out", "锁在门外", "emergency", "home", "Keys, picking"),
    s("lost_found", "Lost & Found", "失物招领", "emergency", "sparkles", "Item description"),
    // Parenting / Other
    s("playground", "Playground", "游乐场", "life", "users", "Swing, slide"),
    s("bedtime", "Bedtime", "哄睡", "life", "home", "Story, sleep"),
    s("babysitter", "Babysitter", "保姆", "service", "users", "Rules, rates"),
    s("playdate", "Playdate", "孩子聚会", "social", "users", "Sharing, toys"),
    s("potty_training", "Potty Training", "如厕训练", "life", "home", "Diapers, success"),
    s("church", "Church", "教堂", "life", "sparkles", "Pray, hymn"),
    s("mosque", "Mosque", "清真寺", "life", "sparkles", "Prayer, shoes"),
    s("temple", "Temple", "寺庙", "life", "sparkles", "Offering, incense"),
];

const fn s(
    id: &'static str,
    display_name_en: &'static str,
    display_name_local: &'static str,
    category_id: &'static str,
    icon_tag: &'static str,
    description: &'static str,
) -> ScenarioDescriptor {
    ScenarioDescriptor {
        id,
        display_name_en,
        display_name_local,
        category_id,
        icon_tag,
        description,
    }
}
