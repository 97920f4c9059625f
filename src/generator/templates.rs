//! Lua script scaffolds and their declared placeholder tokens.
//!
//! The scaffolds are opaque pass-through text for the Tabletop Simulator
//! runtime; the generator guarantees only the substituted regions. Keep the
//! `phase tracker configuration` block markers stable: the reverse parser
//! locates the parameter block through them.

/// Placeholder for the logical x origin in the upgrade-sheet scaffold.
pub const TOKEN_X_INITIAL: &str = "{{X_INITIAL}}";
/// Placeholder for the logical column spacing in the upgrade-sheet scaffold.
pub const TOKEN_X_OFFSET: &str = "{{X_OFFSET}}";
/// Placeholder for the per-row customizations table body.
pub const TOKEN_CUSTOMIZATIONS: &str = "{{CUSTOMIZATIONS}}";

/// Placeholder for the quoted label glyph list.
pub const TOKEN_BUTTON_LABELS: &str = "{{BUTTON_LABELS}}";
/// Placeholder for the quoted button id list.
pub const TOKEN_BUTTON_IDS: &str = "{{BUTTON_IDS}}";
/// Placeholder for the quoted color list.
pub const TOKEN_BUTTON_COLORS: &str = "{{BUTTON_COLORS}}";
/// Placeholder for the id-to-position index map body.
pub const TOKEN_BUTTON_INDEX: &str = "{{BUTTON_INDEX}}";

/// Upgrade-sheet scaffold: draws one toggleable checkbox per derived
/// row/column and saves the marked set with the card.
pub const UPGRADE_SHEET_SCAFFOLD: &str = r#"-- Customizable upgrade sheet
-- Draws one checkbox per customization slot and keeps the marked set in
-- the card's saved state.

local xInitial = {{X_INITIAL}}
local xOffset = {{X_OFFSET}}
local posY = 0.25

local customizations = {
{{CUSTOMIZATIONS}}
}

local marked = {}

function onSave()
  return JSON.encode({ marked = marked })
end

function onLoad(savedData)
  if savedData ~= nil and savedData ~= "" then
    local loaded = JSON.decode(savedData)
    if loaded ~= nil and loaded.marked ~= nil then
      marked = loaded.marked
    end
  end
  createCheckboxes()
end

function slotKey(row, col)
  return row .. ":" .. col
end

function isMarked(row, col)
  return marked[slotKey(row, col)] == true
end

function createCheckboxes()
  self.clearButtons()
  for row, entry in ipairs(customizations) do
    local boxes = entry.checkboxes
    for col = 1, boxes.count do
      local fnName = "toggleSlot_" .. row .. "_" .. col
      _G[fnName] = function()
        toggleSlot(row, col)
      end
      self.createButton({
        click_function = fnName,
        function_owner = self,
        label = isMarked(row, col) and "X" or "",
        position = { xInitial + col * xOffset, posY, boxes.posZ },
        height = 75,
        width = 75,
        font_size = 80,
        scale = { 0.1, 0.1, 0.1 },
        color = { 1, 1, 1, 15 },
        font_color = { 0, 0, 0, 100 }
      })
    end
  end
end

function toggleSlot(row, col)
  local key = slotKey(row, col)
  if marked[key] == true then
    marked[key] = nil
  else
    marked[key] = true
  end
  createCheckboxes()
end
"#;

/// Phase-tracker scaffold: one button per configured phase, with a marker
/// that the runtime moves by resolving a button id through the index map.
pub const PHASE_TRACKER_SCAFFOLD: &str = r#"-- Phase tracker
-- One button per configured phase; clicking a button (or an external call
-- to setPhase) moves the active marker.

---------------------------------------------------------
-- phase tracker configuration
---------------------------------------------------------

local buttonLabels = { {{BUTTON_LABELS}} }
local buttonIds = { {{BUTTON_IDS}} }
local buttonColors = {
  {{BUTTON_COLORS}}
}
local buttonIndex = {
{{BUTTON_INDEX}}
}

---------------------------------------------------------

local activeIndex = 1
local buttonSpacing = 0.45

function onSave()
  return JSON.encode({ activeIndex = activeIndex })
end

function onLoad(savedData)
  if savedData ~= nil and savedData ~= "" then
    local loaded = JSON.decode(savedData)
    if loaded ~= nil and loaded.activeIndex ~= nil then
      activeIndex = loaded.activeIndex
    end
  end
  createPhaseButtons()
end

function hexToColor(hex)
  local r = tonumber(hex:sub(2, 3), 16) / 255
  local g = tonumber(hex:sub(4, 5), 16) / 255
  local b = tonumber(hex:sub(6, 7), 16) / 255
  return { r, g, b }
end

function createPhaseButtons()
  self.clearButtons()
  for i, id in ipairs(buttonIds) do
    local fnName = "phaseClicked_" .. i
    _G[fnName] = function()
      setPhaseIndex(i)
    end
    local dim = i == activeIndex and 1.0 or 0.45
    local rgb = hexToColor(buttonColors[i])
    self.createButton({
      click_function = fnName,
      function_owner = self,
      label = buttonLabels[i],
      tooltip = id,
      position = { -0.68 + (i - 1) * buttonSpacing, 0.2, 0.85 },
      height = 160,
      width = 160,
      font_size = 130,
      scale = { 0.2, 0.2, 0.2 },
      color = { rgb[1] * dim, rgb[2] * dim, rgb[3] * dim },
      font_color = { 1, 1, 1, 100 }
    })
  end
end

function setPhaseIndex(index)
  if index < 1 or index > #buttonIds then
    return
  end
  activeIndex = index
  createPhaseButtons()
end

-- External entry point: resolve a phase button by id.
function setPhase(id)
  local index = buttonIndex[id]
  if index ~= nil then
    setPhaseIndex(index)
  end
end
"#;
