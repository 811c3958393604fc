mod section_list;
mod slider;
mod text_field;
