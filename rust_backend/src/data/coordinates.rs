//! Curated city coordinates keyed by zone identifier.
//!
//! Zones missing from this table have no daylight information; the
//! timeline renders them as night.

use crate::models::Coordinates;

#[rustfmt::skip]
const ZONE_COORDINATES: &[(&str, f64, f64)] = &[
    ("Africa/Abidjan", 5.3600, -4.0083),
    ("Africa/Accra", 5.6037, -0.1870),
    ("Africa/Addis_Ababa", 8.9806, 38.7578),
    ("Africa/Algiers", 36.7538, 3.0588),
    ("Africa/Cairo", 30.0444, 31.2357),
    ("Africa/Casablanca", 33.5731, -7.5898),
    ("Africa/Dakar", 14.7167, -17.4677),
    ("Africa/Johannesburg", -26.2041, 28.0473),
    ("Africa/Khartoum", 15.5007, 32.5599),
    ("Africa/Kinshasa", -4.4419, 15.2663),
    ("Africa/Lagos", 6.5244, 3.3792),
    ("Africa/Nairobi", -1.2921, 36.8219),
    ("Africa/Tunis", 36.8065, 10.1815),
    ("America/Anchorage", 61.2181, -149.9003),
    ("America/Argentina/Buenos_Aires", -34.6037, -58.3816),
    ("America/Asuncion", -25.2637, -57.5759),
    ("America/Bogota", 4.7110, -74.0721),
    ("America/Caracas", 10.4806, -66.9036),
    ("America/Chicago", 41.8781, -87.6298),
    ("America/Denver", 39.7392, -104.9903),
    ("America/Detroit", 42.3314, -83.0458),
    ("America/Edmonton", 53.5461, -113.4938),
    ("America/Halifax", 44.6488, -63.5752),
    ("America/Havana", 23.1136, -82.3666),
    ("America/La_Paz", -16.4897, -68.1193),
    ("America/Lima", -12.0464, -77.0428),
    ("America/Los_Angeles", 34.0522, -118.2437),
    ("America/Mexico_City", 19.4326, -99.1332),
    ("America/Montevideo", -34.9011, -56.1645),
    ("America/New_York", 40.7128, -74.0060),
    ("America/Noronha", -3.8547, -32.4247),
    ("America/Nuuk", 64.1814, -51.6941),
    ("America/Panama", 8.9824, -79.5199),
    ("America/Phoenix", 33.4484, -112.0740),
    ("America/Puerto_Rico", 18.4655, -66.1057),
    ("America/Santiago", -33.4489, -70.6693),
    ("America/Santo_Domingo", 18.4861, -69.9312),
    ("America/Sao_Paulo", -23.5505, -46.6333),
    ("America/St_Johns", 47.5615, -52.7126),
    ("America/Toronto", 43.6532, -79.3832),
    ("America/Vancouver", 49.2827, -123.1207),
    ("America/Winnipeg", 49.8951, -97.1384),
    ("Antarctica/McMurdo", -77.8419, 166.6863),
    ("Asia/Almaty", 43.2220, 76.8512),
    ("Asia/Baghdad", 33.3152, 44.3661),
    ("Asia/Baku", 40.4093, 49.8671),
    ("Asia/Bangkok", 13.7563, 100.5018),
    ("Asia/Beirut", 33.8938, 35.5018),
    ("Asia/Colombo", 6.9271, 79.8612),
    ("Asia/Dhaka", 23.8103, 90.4125),
    ("Asia/Dubai", 25.2048, 55.2708),
    ("Asia/Ho_Chi_Minh", 10.8231, 106.6297),
    ("Asia/Hong_Kong", 22.3193, 114.1694),
    ("Asia/Jakarta", -6.2088, 106.8456),
    ("Asia/Jerusalem", 31.7683, 35.2137),
    ("Asia/Kabul", 34.5553, 69.2075),
    ("Asia/Kamchatka", 53.0452, 158.6483),
    ("Asia/Karachi", 24.8607, 67.0011),
    ("Asia/Kathmandu", 27.7172, 85.3240),
    ("Asia/Kolkata", 22.5726, 88.3639),
    ("Asia/Kuala_Lumpur", 3.1390, 101.6869),
    ("Asia/Manila", 14.5995, 120.9842),
    ("Asia/Riyadh", 24.7136, 46.6753),
    ("Asia/Seoul", 37.5665, 126.9780),
    ("Asia/Shanghai", 31.2304, 121.4737),
    ("Asia/Singapore", 1.3521, 103.8198),
    ("Asia/Taipei", 25.0330, 121.5654),
    ("Asia/Tashkent", 41.2995, 69.2401),
    ("Asia/Tehran", 35.6892, 51.3890),
    ("Asia/Tokyo", 35.6762, 139.6503),
    ("Asia/Ulaanbaatar", 47.8864, 106.9057),
    ("Asia/Vladivostok", 43.1198, 131.8869),
    ("Asia/Yangon", 16.8409, 96.1735),
    ("Asia/Yekaterinburg", 56.8389, 60.6057),
    ("Atlantic/Azores", 37.7412, -25.6756),
    ("Atlantic/Cape_Verde", 14.9330, -23.5133),
    ("Atlantic/Reykjavik", 64.1466, -21.9426),
    ("Atlantic/South_Georgia", -54.2811, -36.5092),
    ("Australia/Adelaide", -34.9285, 138.6007),
    ("Australia/Brisbane", -27.4698, 153.0251),
    ("Australia/Darwin", -12.4634, 130.8456),
    ("Australia/Eucla", -31.6773, 128.8893),
    ("Australia/Lord_Howe", -31.5553, 159.0821),
    ("Australia/Melbourne", -37.8136, 144.9631),
    ("Australia/Perth", -31.9505, 115.8605),
    ("Australia/Sydney", -33.8688, 151.2093),
    ("Europe/Amsterdam", 52.3676, 4.9041),
    ("Europe/Athens", 37.9838, 23.7275),
    ("Europe/Berlin", 52.5200, 13.4050),
    ("Europe/Brussels", 50.8503, 4.3517),
    ("Europe/Bucharest", 44.4268, 26.1025),
    ("Europe/Dublin", 53.3498, -6.2603),
    ("Europe/Helsinki", 60.1699, 24.9384),
    ("Europe/Istanbul", 41.0082, 28.9784),
    ("Europe/Kyiv", 50.4501, 30.5234),
    ("Europe/Lisbon", 38.7223, -9.1393),
    ("Europe/London", 51.5074, -0.1278),
    ("Europe/Madrid", 40.4168, -3.7038),
    ("Europe/Moscow", 55.7558, 37.6173),
    ("Europe/Oslo", 59.9139, 10.7522),
    ("Europe/Paris", 48.8566, 2.3522),
    ("Europe/Prague", 50.0755, 14.4378),
    ("Europe/Rome", 41.9028, 12.4964),
    ("Europe/Samara", 53.1959, 50.1002),
    ("Europe/Stockholm", 59.3293, 18.0686),
    ("Europe/Vienna", 48.2082, 16.3738),
    ("Europe/Warsaw", 52.2297, 21.0122),
    ("Europe/Zurich", 47.3769, 8.5417),
    ("Indian/Chagos", -7.3195, 72.4229),
    ("Indian/Maldives", 4.1755, 73.5093),
    ("Indian/Mauritius", -20.1609, 57.5012),
    ("Pacific/Apia", -13.8507, -171.7514),
    ("Pacific/Auckland", -36.8485, 174.7633),
    ("Pacific/Chatham", -43.9535, -176.5597),
    ("Pacific/Fiji", -18.1248, 178.4501),
    ("Pacific/Guam", 13.4443, 144.7937),
    ("Pacific/Honolulu", 21.3069, -157.8583),
    ("Pacific/Kiritimati", 1.8721, -157.4278),
    ("Pacific/Marquesas", -8.9130, -140.1000),
    ("Pacific/Noumea", -22.2758, 166.4580),
    ("Pacific/Pago_Pago", -14.2756, -170.7020),
    ("Pacific/Port_Moresby", -9.4438, 147.1803),
    ("Pacific/Tongatapu", -21.1394, -175.2018),
];

/// Coordinates of the city a zone is named after, if curated.
pub fn coordinates_for(zone_id: &str) -> Option<Coordinates> {
    ZONE_COORDINATES
        .iter()
        .find(|(id, _, _)| *id == zone_id)
        .map(|&(_, latitude, longitude)| Coordinates::new(latitude, longitude))
}
