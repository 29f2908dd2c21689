use shared::{ScreeningDto, ShowroomDto};

use crate::domain::models::{Screening, Showroom};

pub struct ScreeningMapper;

impl ScreeningMapper {
    pub fn to_dto(screening: &Screening) -> ScreeningDto {
        ScreeningDto {
            id: screening.id().to_string(),
            movie_id: screening.movie().id().to_string(),
            movie_title: screening.movie().title().to_string(),
            ticket_count: screening.ticket_count(),
            price_per_ticket: screening.price_per_ticket(),
            date_time: screening.date_time(),
            formatted_date_time: screening.formatted_date_time(),
            summary: screening.summary(),
        }
    }

    pub fn to_dto_list(screenings: &[Screening]) -> Vec<ScreeningDto> {
        screenings.iter().map(Self::to_dto).collect()
    }
}

pub struct ShowroomMapper;

impl ShowroomMapper {
    pub fn to_dto(showroom: &Showroom) -> ShowroomDto {
        ShowroomDto {
            id: showroom.id().to_string(),
            name: showroom.name().to_string(),
            capacity: showroom.capacity(),
            screenings: ScreeningMapper::to_dto_list(showroom.screenings()),
        }
    }

    pub fn to_dto_list(showrooms: &[Showroom]) -> Vec<ShowroomDto> {
        showrooms.iter().map(Self::to_dto).collect()
    }
}
