use super::holiday::{HolidayCalendar, HolidayRule};

/// national holidays of Peru, in rule order
pub static PERU_HOLIDAYS: [HolidayRule; 15] = [
    HolidayRule::nearest_weekday("New Year's Day", 1, 1),
    HolidayRule::nearest_weekday("New Year's 2nd Day", 1, 2),
    HolidayRule::easter_offset("Jueves Santo", -3),
    HolidayRule::fixed("Dia del trabajo", 5, 1),
    HolidayRule::easter_offset("Viernes Santo", -2),
    HolidayRule::fixed("San Pedro y San Pablo", 6, 29),
    HolidayRule::fixed("Dia de la independencia 1", 7, 28),
    HolidayRule::fixed("Dia de la independencia 2", 7, 29),
    HolidayRule::fixed("Batalla de Junin", 8, 6),
    HolidayRule::fixed("Santa Rosa de Lima", 8, 30),
    HolidayRule::fixed("Combate de Angamos", 10, 8),
    HolidayRule::fixed("Dia de todos los santos", 11, 1),
    HolidayRule::fixed("Dia de la Inmaculada Concepcion", 12, 8),
    HolidayRule::fixed("Batalla de Ayacucho", 12, 9),
    HolidayRule::fixed("Navidad", 12, 25),
];

pub static PERU: HolidayCalendar = HolidayCalendar::new("Peru", &PERU_HOLIDAYS);
