mod unit_render_table;
