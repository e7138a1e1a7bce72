use sea_orm::entity::prelude::*;

/// Live student record with per-category need and received flags.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub application_id: Option<Uuid>,
    pub full_name: String,
    pub birth_year: i32,
    pub phone: String,
    pub address: String,
    pub facebook_link: Option<String>,
    pub area_id: Option<Uuid>,
    pub academic_year: String,
    pub difficult_situation: String,
    pub need_laptop: bool,
    pub laptop_received: bool,
    pub laptop_received_date: Option<DateTime>,
    pub need_motorbike: bool,
    pub motorbike_received: bool,
    pub motorbike_received_date: Option<DateTime>,
    pub need_tuition: bool,
    pub tuition_supported: bool,
    pub tuition_support_start_date: Option<DateTime>,
    pub need_components: bool,
    pub components_details: Option<String>,
    pub components_received: bool,
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    /// Whether every need the student declared has been satisfied.
    pub fn has_received_all(&self) -> bool {
        (!self.need_laptop || self.laptop_received)
            && (!self.need_motorbike || self.motorbike_received)
            && (!self.need_tuition || self.tuition_supported)
            && (!self.need_components || self.components_received)
    }

    /// Whether the student declared any need at all.
    pub fn has_any_need(&self) -> bool {
        self.need_laptop || self.need_motorbike || self.need_tuition || self.need_components
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::area::Entity",
        from = "Column::AreaId",
        to = "super::area::Column::Id"
    )]
    Area,
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
